use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::path::Path;

use csv::StringRecord;
use log::info;

use crate::stats::value_counts;
use crate::table::{self, column_index, field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupSummary {
    pub original: usize,
    pub kept: usize,
    pub removed: usize,
}

// Keeps the first occurrence of each key in file order. With exempt_empty,
// rows with an empty key are never collapsed against each other.
fn keep_first(
    rows: Vec<StringRecord>,
    key_idx: usize,
    exempt_empty: bool,
) -> (Vec<StringRecord>, Vec<StringRecord>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut removed = Vec::new();

    for row in rows {
        let key = field(&row, key_idx).to_string();
        if exempt_empty && key.is_empty() {
            kept.push(row);
            continue;
        }
        if seen.insert(key) {
            kept.push(row);
        } else {
            removed.push(row);
        }
    }

    (kept, removed)
}

// Groups of rows sharing a key value, restricted to keys occurring more than
// once, in first-seen order.
fn duplicate_groups<'a>(
    rows: &'a [StringRecord],
    key_idx: usize,
    skip_empty: bool,
) -> Vec<(String, Vec<&'a StringRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut map: HashMap<String, Vec<&StringRecord>> = HashMap::new();

    for row in rows {
        let key = field(row, key_idx).to_string();
        if skip_empty && key.is_empty() {
            continue;
        }
        if !map.contains_key(&key) {
            order.push(key.clone());
        }
        map.entry(key).or_default().push(row);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let group = map.remove(&key)?;
            if group.len() > 1 {
                Some((key, group))
            } else {
                None
            }
        })
        .collect()
}

fn opt_field<'a>(row: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.map(|i| field(row, i)).unwrap_or("")
}

fn report_duplicates(
    rows: &[StringRecord],
    what: &str,
    key_idx: usize,
    skip_empty: bool,
    id_idx: usize,
    name_idx: Option<usize>,
) {
    info!("Checking for duplicate {}...", what);
    let groups = duplicate_groups(rows, key_idx, skip_empty);
    if groups.is_empty() {
        return;
    }
    let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
    info!("Found {} records with duplicate {}:", total, what);
    for (key, group) in groups {
        for row in group {
            info!(
                "  ID={}, Name={}, Value={}",
                field(row, id_idx),
                opt_field(row, name_idx),
                key
            );
        }
    }
}

pub fn dedup_by_id<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<DedupSummary, Box<dyn Error>> {
    info!("Reading CSV file...");
    let (headers, rows) = table::read_table(input)?;
    let original = rows.len();
    info!("Original record count: {}", original);

    let id_idx = column_index(&headers, "id")?;
    let name_idx = column_index(&headers, "name").ok();
    let phone_idx = column_index(&headers, "phone").ok();
    let email_idx = column_index(&headers, "email").ok();
    let city_idx = column_index(&headers, "city").ok();

    info!("Checking for duplicate IDs...");
    let groups = duplicate_groups(&rows, id_idx, false);
    if !groups.is_empty() {
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        info!("Found {} records with duplicate IDs:", total);
        for (id, group) in &groups {
            for row in group {
                info!(
                    "  ID={}, Name={}, Phone={}",
                    id,
                    opt_field(row, name_idx),
                    opt_field(row, phone_idx)
                );
            }
        }
    }

    let (kept, removed) = keep_first(rows, id_idx, false);

    // Report-only audits over the deduplicated rows.
    if let Some(idx) = phone_idx {
        report_duplicates(&kept, "phone numbers", idx, true, id_idx, name_idx);
    }
    if let Some(idx) = email_idx {
        report_duplicates(&kept, "emails", idx, true, id_idx, name_idx);
    }
    if let Some(idx) = name_idx {
        report_duplicates(&kept, "names", idx, false, id_idx, name_idx);
    }

    info!("Cleaned record count: {}", kept.len());
    info!("Removed {} duplicate records", removed.len());

    table::write_table(output, &headers, &kept)?;

    info!("Summary statistics:");
    info!("Total unique accountants: {}", kept.len());
    if let Some(idx) = phone_idx {
        let with_phone = kept.iter().filter(|r| !field(r, idx).is_empty()).count();
        info!("Records with phone numbers: {}", with_phone);
    }
    if let Some(idx) = email_idx {
        let with_email = kept.iter().filter(|r| !field(r, idx).is_empty()).count();
        info!("Records with email addresses: {}", with_email);
    }
    if let Some(idx) = city_idx {
        let baku = kept
            .iter()
            .filter(|r| field(r, idx).to_lowercase().contains("bak"))
            .count();
        info!("Records from Bakı: {}", baku);
        info!("Top 10 cities:");
        for (city, count) in value_counts(&kept, idx).into_iter().take(10) {
            info!("  {}: {}", city, count);
        }
    }

    Ok(DedupSummary {
        original,
        kept: kept.len(),
        removed: removed.len(),
    })
}

pub fn dedup_by_phone<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<DedupSummary, Box<dyn Error>> {
    info!("Reading CSV file...");
    let (headers, rows) = table::read_table(input)?;
    let original = rows.len();
    info!("Original record count: {}", original);

    let phone_idx = column_index(&headers, "phone")?;
    let id_idx = column_index(&headers, "id")?;
    let name_idx = column_index(&headers, "name").ok();

    info!("Finding records with duplicate phone numbers...");
    let groups = duplicate_groups(&rows, phone_idx, true);
    if !groups.is_empty() {
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        info!("Found {} records with duplicate phone numbers:", total);
        for (phone, group) in &groups {
            info!("Phone: {}", phone);
            for (i, row) in group.iter().enumerate() {
                let status = if i == 0 { "KEEP" } else { "REMOVE" };
                info!(
                    "  {}: ID={}, Name={}",
                    status,
                    field(row, id_idx),
                    opt_field(row, name_idx)
                );
            }
        }
    }

    info!("Removing duplicate phone numbers (keeping first occurrence)...");
    let (kept, removed) = keep_first(rows, phone_idx, true);

    info!("Cleaned record count: {}", kept.len());
    info!("Removed {} duplicate phone records", removed.len());

    table::write_table(output, &headers, &kept)?;

    if !removed.is_empty() {
        info!("Summary of removed records:");
        for row in &removed {
            info!(
                "Removed: ID={}, Name={}, Phone={}",
                field(row, id_idx),
                opt_field(row, name_idx),
                field(row, phone_idx)
            );
        }
    }

    info!("Final statistics:");
    info!("Total unique accountants: {}", kept.len());
    let unique_phones: HashSet<&str> = kept
        .iter()
        .map(|r| field(r, phone_idx))
        .filter(|p| !p.is_empty())
        .collect();
    info!("Unique phone numbers: {}", unique_phones.len());
    info!(
        "Records with phone numbers: {}",
        kept.iter().filter(|r| !field(r, phone_idx).is_empty()).count()
    );

    Ok(DedupSummary {
        original,
        kept: kept.len(),
        removed: removed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(path: &Path, content: &str) {
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn id_dedup_keeps_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        write_fixture(
            &input,
            "id,name,phone,email,city\n1,A,x,a@x.az,Bakı\n2,B,y,b@x.az,Gəncə\n1,C,z,c@x.az,Bakı\n",
        );

        let summary = dedup_by_id(&input, &output).unwrap();
        assert_eq!(summary.original, 3);
        assert_eq!(summary.kept, 2);
        assert_eq!(summary.removed, 1);

        let (_, rows) = table::read_table(&output).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(field(&rows[0], 0), "1");
        assert_eq!(field(&rows[0], 1), "A");
        assert_eq!(field(&rows[1], 0), "2");
    }

    #[test]
    fn id_dedup_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let once = dir.path().join("once.csv");
        let twice = dir.path().join("twice.csv");
        write_fixture(
            &input,
            "id,name,phone,email,city\n5,A,x,,\n5,B,y,,\n6,C,z,,\n",
        );

        dedup_by_id(&input, &once).unwrap();
        let second = dedup_by_id(&once, &twice).unwrap();
        assert_eq!(second.removed, 0);
        assert_eq!(
            std::fs::read_to_string(&once).unwrap(),
            std::fs::read_to_string(&twice).unwrap()
        );
    }

    #[test]
    fn phone_dedup_exempts_empty_phones() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        write_fixture(
            &input,
            "id,name,phone\n1,A,+994501234567\n2,B,+994501234567\n3,C,\n4,D,\n",
        );

        let summary = dedup_by_phone(&input, &output).unwrap();
        assert_eq!(summary.kept, 3);
        assert_eq!(summary.removed, 1);

        let (_, rows) = table::read_table(&output).unwrap();
        // First of the duplicate pair survives; both empty-phone rows survive.
        assert_eq!(field(&rows[0], 0), "1");
        assert_eq!(field(&rows[1], 0), "3");
        assert_eq!(field(&rows[2], 0), "4");
    }

    #[test]
    fn row_count_never_increases_and_unique_keys_survive() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        write_fixture(&input, "id,name,phone\n9,A,x\n");

        let summary = dedup_by_id(&input, &output).unwrap();
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.removed, 0);
    }

    #[test]
    fn missing_key_column_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        write_fixture(&input, "name,city\nA,Bakı\n");

        assert!(dedup_by_id(&input, &output).is_err());
        assert!(dedup_by_phone(&input, &output).is_err());
    }
}
