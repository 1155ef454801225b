use std::thread;
use std::time::Duration;

use log::info;
use rand::Rng;

// Pacing between successive detail fetches, to stay polite to the server.
pub fn random_detail_delay() {
    let mut rng = rand::thread_rng();
    let delay_ms: u64 = rng.gen_range(1000..=3000);
    info!("Waiting {} ms before next detail fetch...", delay_ms);
    thread::sleep(Duration::from_millis(delay_ms));
}
