use muhasib_scraper_lib::record::{ProfileRecord, FIELDS};
use muhasib_scraper_lib::reorder::{reorder_columns, PHONE_FIRST_ORDER};
use muhasib_scraper_lib::{dedup, table, writer};

fn record(id: &str, name: &str, phone: &str) -> ProfileRecord {
    let mut rec = ProfileRecord::with_id(id, &format!("https://www.muhasib.az/cv.php?id={}", id));
    rec.name = name.to_string();
    rec.phone = phone.to_string();
    rec.city = "Bakı".to_string();
    rec.age = "34 il".to_string();
    rec.min_salary = "(AZN): 800".to_string();
    rec
}

#[test]
fn dedup_then_reorder_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.csv");
    let cleaned = dir.path().join("cleaned.csv");
    let no_phone_dupes = dir.path().join("no_phone_dupes.csv");
    let phone_first = dir.path().join("phone_first.csv");

    // Duplicate id 1 and a phone shared between ids 2 and 3; id 4 has no phone.
    let records = vec![
        record("1", "Əli Məmmədov", "+994501234567"),
        record("1", "Əli Məmmədov", "+994501234567"),
        record("2", "Aygün Əliyeva", "+994557654321"),
        record("3", "Rəşad Quliyev", "+994557654321"),
        record("4", "Nigar Həsənova", ""),
    ];
    writer::save_records(&records, &raw).unwrap();

    let by_id = dedup::dedup_by_id(&raw, &cleaned).unwrap();
    assert_eq!(by_id.original, 5);
    assert_eq!(by_id.kept, 4);

    let by_phone = dedup::dedup_by_phone(&cleaned, &no_phone_dupes).unwrap();
    // Ids 2 and 3 collapse to 2; the empty-phone row is exempt.
    assert_eq!(by_phone.kept, 3);

    let (_, rows) = table::read_table(&no_phone_dupes).unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);

    reorder_columns(&no_phone_dupes, &phone_first, &PHONE_FIRST_ORDER).unwrap();

    let (headers, reordered) = table::read_table(&phone_first).unwrap();
    assert_eq!(headers.iter().collect::<Vec<_>>(), PHONE_FIRST_ORDER.to_vec());
    assert_eq!(reordered.len(), rows.len());
    // Row values survive the permutation.
    assert_eq!(reordered[0].get(0).unwrap(), "+994501234567");
    assert_eq!(reordered[0].get(1).unwrap(), "1");
    assert_eq!(reordered[0].get(2).unwrap(), "Əli Məmmədov");
    assert_eq!(reordered[2].get(0).unwrap(), "");
    assert_eq!(reordered[2].get(2).unwrap(), "Nigar Həsənova");
}

#[test]
fn phone_dedup_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.csv");
    let once = dir.path().join("once.csv");
    let twice = dir.path().join("twice.csv");

    let records = vec![
        record("1", "A", "+994501234567"),
        record("2", "B", "+994501234567"),
        record("3", "C", ""),
    ];
    writer::save_records(&records, &raw).unwrap();

    dedup::dedup_by_phone(&raw, &once).unwrap();
    let second = dedup::dedup_by_phone(&once, &twice).unwrap();
    assert_eq!(second.removed, 0);
    assert_eq!(
        std::fs::read_to_string(&once).unwrap(),
        std::fs::read_to_string(&twice).unwrap()
    );
}

#[test]
fn reorder_rejects_wrong_column_set() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.csv");
    writer::save_records(&[record("1", "A", "x")], &raw).unwrap();

    let mut wrong: Vec<&str> = FIELDS.to_vec();
    wrong.pop();
    assert!(reorder_columns(&raw, dir.path().join("out.csv"), &wrong).is_err());
}
