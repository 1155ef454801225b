use std::error::Error;
use std::path::Path;

use log::{info, warn};

use crate::record::{ProfileRecord, FIELDS};

// Writes the fixed header plus one row per record, overwriting the
// destination. UTF-8 throughout, so Azerbaijani script survives intact.
pub fn save_records<P: AsRef<Path>>(
    records: &[ProfileRecord],
    path: P,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    if records.is_empty() {
        warn!("No records to save; writing header only to {:?}", path);
        wtr.write_record(FIELDS)?;
    } else {
        for record in records {
            wtr.serialize(record)?;
        }
    }

    wtr.flush()?;
    info!("Data saved to {:?} ({} records)", path, records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut first = ProfileRecord::with_id("2", "http://example.com/cv.php?id=2");
        first.name = "Əli Məmmədov".to_string();
        first.city = "Bakı".to_string();
        let second = ProfileRecord::with_id("1", "http://example.com/cv.php?id=1");

        save_records(&[first, second], &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            rdr.headers().unwrap().iter().collect::<Vec<_>>(),
            FIELDS.to_vec()
        );
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        // Input order preserved, non-Latin text intact.
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][2], "Əli Məmmədov");
        assert_eq!(&rows[0][3], "Bakı");
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn empty_input_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        save_records(&[], &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), FIELDS.len());
        assert_eq!(rdr.records().count(), 0);
    }
}
