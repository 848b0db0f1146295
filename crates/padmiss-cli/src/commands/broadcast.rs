//! Broadcast command: announce the cabinet address, once or periodically.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use padmiss_core::{Config, TournamentApi};
use tracing::{info, warn};

pub fn run(config: &Config, interval: Option<u64>) -> Result<()> {
    let api = TournamentApi::new(config);

    let Some(seconds) = interval else {
        if api.broadcast() {
            println!("Broadcast ok.");
        } else {
            println!("Broadcast failed.");
        }
        return Ok(());
    };

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    info!("Broadcasting every {}s, Ctrl-C to stop", seconds);
    while running.load(Ordering::SeqCst) {
        if api.broadcast() {
            info!("Broadcast ok");
        } else {
            warn!("Broadcast failed");
        }

        // Sleep in one-second slices so Ctrl-C is honored promptly.
        let mut remaining = seconds;
        while remaining > 0 && running.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_secs(1));
            remaining -= 1;
        }
    }
    Ok(())
}
