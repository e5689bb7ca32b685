//! Basic logger usage example
//!
//! Demonstrates the threshold, per-logger overrides, both message styles and
//! deadlines.
//!
//! Run with: cargo run --example basic_usage

use rust_gated_logger::prelude::*;
use rust_gated_logger::{debug, info};
use std::time::Duration;

static NET: Logger = Logger::new("NET");

fn main() -> Result<()> {
    println!("=== Rust Gated Logger - Basic Usage Example ===\n");

    LoggerConfig::new().with_min_level(LogLevel::Info).apply();

    println!("1. Threshold INFO - verbose and debug are skipped:");
    NET.verbose(format_args!("verbose (hidden)"));
    NET.debug(format_args!("debug (hidden)"));
    NET.info(format_args!("info (visible)"));
    NET.warn(format_args!("warn (visible)"));

    println!("\n2. Stream-composed message:");
    NET.log_stream(LogLevel::Info, |s| {
        s.push("peers=").push(3).push(" uptime=").push(CachedSteadyClock::now(true));
    });

    println!("\n3. Override force-enables DEBUG for one logger:");
    let storage = Logger::new("STORAGE").with_override(LogLevel::Verbose);
    debug!(storage, "compaction pass {} started", 1);
    debug!(NET, "still hidden for NET");

    println!("\n4. Deadline:");
    let deadline: Deadline = Deadline::new(Duration::from_millis(20));
    while !deadline.is_over() {
        std::thread::sleep(Duration::from_millis(5));
        info!(NET, "remaining {:?}", deadline.remaining());
    }

    flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
