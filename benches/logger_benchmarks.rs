//! Criterion benchmarks for rust_gated_logger
//!
//! Mirrors the per-call measurements the logger was tuned against: a loop with
//! no logging, logging at a disabled level, and enabled FMT/STREAM lines with
//! and without flushing. Output goes to `io::sink()` so the numbers reflect
//! dispatch and formatting, not terminal speed.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_gated_logger::core::{set_flush_per_call, SteadyClock};
use rust_gated_logger::prelude::*;
use rust_gated_logger::debug;
use std::io;

static LOG: Logger = Logger::new("LMAIN");

fn dowork(a: u64, i: u64) -> u64 {
    (a + i) / a
}

fn dowork_logged(a: u64, i: u64) -> u64 {
    debug!(LOG, "{} - {} {}", a, i, "");
    debug!(LOG, "no");
    (a + i) / a
}

fn quiet_sink() {
    set_sink(Box::new(WriterSink::named(io::sink(), "null")));
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_disabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled");
    group.throughput(Throughput::Elements(1));
    quiet_sink();
    set_log_level(LogLevel::Info);

    group.bench_function("no_log", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            dowork(black_box(1_000), i)
        });
    });

    group.bench_function("debug_below_threshold", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            dowork_logged(black_box(1_000), i)
        });
    });

    group.bench_function("log_stream_below_threshold", |b| {
        b.iter(|| {
            LOG.log_stream(LogLevel::Verbose, |s| {
                s.push(black_box(1)).push(" - ").push(black_box(2));
            });
        });
    });

    group.finish();
}

fn bench_enabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("enabled");
    group.throughput(Throughput::Elements(1));
    quiet_sink();
    set_log_level(LogLevel::Verbose);

    for flush in [false, true] {
        set_flush_per_call(flush);
        let suffix = if flush { "flush" } else { "no_flush" };

        group.bench_function(format!("fmt_empty_{}", suffix), |b| {
            b.iter(|| LOG.info(format_args!("")));
        });

        group.bench_function(format!("fmt_int_int_str_{}", suffix), |b| {
            b.iter(|| {
                LOG.info(format_args!("{} - {} {}", black_box(1_000u64), black_box(7u64), "str"))
            });
        });

        group.bench_function(format!("stream_int_int_str_{}", suffix), |b| {
            b.iter(|| {
                LOG.log_stream(LogLevel::Info, |s| {
                    s.push(black_box(1_000u64)).push(" - ").push(black_box(7u64)).push(" str");
                })
            });
        });
    }

    set_flush_per_call(false);
    set_log_level(LogLevel::Info);
    group.finish();
}

// ============================================================================
// Clock Benchmarks
// ============================================================================

fn bench_clocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    group.throughput(Throughput::Elements(1));

    group.bench_function("steady", |b| b.iter(SteadyClock::now));
    group.bench_function("cached_refresh", |b| b.iter(|| CachedSteadyClock::now(true)));
    group.bench_function("cached_advance", |b| b.iter(|| CachedSteadyClock::now(false)));
    group.bench_function("decompose_and_render", |b| {
        let mut out = String::with_capacity(32);
        b.iter(|| {
            use std::fmt::Write;
            out.clear();
            let _ = write!(out, "{}", black_box(TimePoint::from_nanos(90_061_001_002_000)));
            out.len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_disabled, bench_enabled, bench_clocks);
criterion_main!(benches);
