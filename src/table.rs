use std::error::Error;
use std::path::Path;

use csv::StringRecord;
use log::info;

// Shared CSV plumbing for the post-processing stages. Rows are kept as raw
// string records so every stage works on arbitrary column layouts.

pub fn read_table<P: AsRef<Path>>(
    path: P,
) -> Result<(StringRecord, Vec<StringRecord>), Box<dyn Error>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }

    info!("Loaded {} rows from {:?}", rows.len(), path);
    Ok((headers, rows))
}

pub fn write_table<P: AsRef<Path>>(
    path: P,
    headers: &StringRecord,
    rows: &[StringRecord],
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

pub fn column_index(headers: &StringRecord, name: &str) -> Result<usize, Box<dyn Error>> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| format!("column '{}' not found in header", name).into())
}

// Short rows read back as empty fields rather than panicking.
pub fn field<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("")
}
