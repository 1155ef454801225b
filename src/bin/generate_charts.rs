use std::env;
use std::error::Error;

use muhasib_scraper_lib::{charts, logger};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let args: Vec<String> = env::args().collect();
    let input = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("muhasib_accountants_cleaned.csv");
    let out_dir = args.get(2).map(String::as_str).unwrap_or("charts");

    charts::generate_all(input, out_dir)?;
    Ok(())
}
