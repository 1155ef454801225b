use std::collections::HashSet;
use std::error::Error;
use std::path::Path;

use csv::StringRecord;
use log::info;

use crate::table::{self, column_index, field};

// Phone number first, for the call-list export.
pub const PHONE_FIRST_ORDER: [&str; 15] = [
    "phone",
    "id",
    "name",
    "city",
    "email",
    "age",
    "gender",
    "marital_status",
    "category",
    "position",
    "min_salary",
    "education",
    "experience",
    "skills",
    "url",
];

// Hard precondition: new_order must be exactly the source header set. A
// mismatch corrupts every downstream analysis, so it refuses instead of
// truncating or padding.
pub fn reorder_columns<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    new_order: &[&str],
) -> Result<(), Box<dyn Error>> {
    let (headers, rows) = table::read_table(input)?;
    info!("Current columns: {:?}", headers.iter().collect::<Vec<_>>());

    let current: HashSet<&str> = headers.iter().collect();
    let requested: HashSet<&str> = new_order.iter().copied().collect();
    if new_order.len() != headers.len() || current != requested {
        return Err(format!(
            "column set mismatch: file has {:?}, requested {:?}",
            headers.iter().collect::<Vec<_>>(),
            new_order
        )
        .into());
    }

    let mut indices = Vec::with_capacity(new_order.len());
    for name in new_order {
        indices.push(column_index(&headers, name)?);
    }

    let new_headers: StringRecord = new_order.iter().copied().collect();
    let reordered: Vec<StringRecord> = rows
        .iter()
        .map(|row| indices.iter().map(|&i| field(row, i)).collect())
        .collect();

    table::write_table(output, &new_headers, &reordered)?;
    info!("New column order: {:?}", new_order);
    Ok(())
}
