use std::env;
use std::error::Error;

use muhasib_scraper_lib::{logger, stats};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| "muhasib_accountants_cleaned.csv".to_string());

    stats::analyze(&input)?;
    Ok(())
}
