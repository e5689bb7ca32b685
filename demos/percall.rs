//! Per-call cost driver
//!
//! Runs a tight loop that makes two DEBUG log calls per iteration and reports
//! the elapsed time and cost per iteration.
//!
//! Run with: cargo run --release --example percall -- <iterations> <level 0..5>

use rust_gated_logger::prelude::*;
use rust_gated_logger::{debug, info};

static LOG: Logger = Logger::new("LMAIN");

fn dowork(a: u64, i: u64) -> u64 {
    debug!(LOG, "{} - {} {}", a, i, "");
    debug!(LOG, "no");
    (a + i) / a
}

fn bench(a: u64) -> u64 {
    let mut result = a;
    for i in 0..a {
        result += dowork(a, i);
    }
    result
}

fn parse_args() -> Result<(u64, LogLevel)> {
    let mut args = std::env::args().skip(1);
    let usage = || LoggerError::config("percall", "usage: percall <iterations> <level 0..5>");

    let count = args
        .next()
        .ok_or_else(usage)?
        .parse::<u64>()
        .map_err(|e| LoggerError::config("percall", format!("bad iteration count: {}", e)))?;
    if count == 0 {
        return Err(LoggerError::config("percall", "iteration count must be positive"));
    }
    let level = args
        .next()
        .ok_or_else(usage)?
        .parse::<u8>()
        .map_err(|e| LoggerError::config("percall", format!("bad level: {}", e)))?;

    Ok((count, LogLevel::try_from(level)?))
}

fn main() -> Result<()> {
    let (count, level) = parse_args()?;
    set_log_level(level);

    info!(LOG, "main: {}", count);
    debug!(LOG, "deb");
    rust_gated_logger::error!(LOG, "err");

    let start = SteadyClock::now();
    let result = bench(count);
    let elapsed = SteadyClock::now() - start;
    let per_call = elapsed.as_nanos() as f64 / count as f64;

    LOG.log_stream(LogLevel::Info, |s| {
        s.push("res= ")
            .push(result)
            .push(", elapsed=")
            .push(TimestampBreakdown::from_duration(elapsed))
            .push(", percall=")
            .push(per_call);
    });
    flush()?;
    eprintln!(
        "res= {}, elapsed={}, percall={}",
        result,
        TimestampBreakdown::from_duration(elapsed),
        per_call
    );

    Ok(())
}
