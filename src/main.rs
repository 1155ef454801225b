use std::env;
use std::error::Error;

use log::info;

use muhasib_scraper_lib::scraper::DEFAULT_MAX_PROFILES;
use muhasib_scraper_lib::{logger, writer, Scraper};

const OUTPUT_CSV: &str = "muhasib_accountants.csv";

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting Muhasib.az scraper...");

    // Single optional argument: cap on detail pages fetched this run.
    let max_profiles = match env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<usize>()
                .map_err(|_| format!("invalid max-profiles argument: {}", arg))?,
        ),
        None => Some(DEFAULT_MAX_PROFILES),
    };

    let scraper = Scraper::new();
    let records = scraper.run(max_profiles);
    writer::save_records(&records, OUTPUT_CSV)?;

    Ok(())
}
