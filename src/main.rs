//! Falling Blocks entry point
//!
//! Sets up logging and runs the game loop until the window closes.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    log::info!("Falling Blocks starting with seed: {}", seed);

    match falling_blocks::platform::run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}
