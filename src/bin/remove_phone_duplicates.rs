use std::env;
use std::error::Error;

use muhasib_scraper_lib::{dedup, logger};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let args: Vec<String> = env::args().collect();
    let input = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("muhasib_accountants_cleaned.csv");
    let output = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("muhasib_accountants_no_phone_duplicates.csv");

    dedup::dedup_by_phone(input, output)?;
    Ok(())
}
