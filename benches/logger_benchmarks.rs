//! Criterion benchmarks for term_logger
//!
//! The filtering group measures the decision path that runs on every
//! call site, including the suppressed case the min-enabled-level
//! contract exists for; the rendering group measures full line and
//! progress-frame output into a sink.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use term_logger::prelude::*;

fn sink_logger() -> TerminalLogger<io::Sink> {
    TerminalLogger::new(io::sink(), 80, false)
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let mut logger = sink_logger();
    let id = EventId::from("bench:src/lib.rs:1");

    group.bench_function("min_enabled_level", |b| {
        b.iter(|| black_box(logger.min_enabled_level()));
    });

    group.bench_function("should_log_rejected", |b| {
        b.iter(|| {
            black_box(logger.should_log(
                LogLevel::DEBUG,
                black_box("bench::module"),
                "src/lib.rs",
                1,
                &id,
                None,
                None,
            ))
        });
    });

    group.bench_function("should_log_accepted", |b| {
        b.iter(|| {
            black_box(logger.should_log(
                LogLevel::WARN,
                black_box("bench::module"),
                "src/lib.rs",
                1,
                &id,
                None,
                None,
            ))
        });
    });

    group.bench_function("should_log_throttled", |b| {
        b.iter(|| {
            black_box(logger.should_log(
                LogLevel::WARN,
                black_box("bench::module"),
                "src/lib.rs",
                1,
                &id,
                Some(10),
                None,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    group.bench_function("plain_line", |b| {
        let mut logger = sink_logger();
        let event = LogEvent::new(LogLevel::INFO, "e1", "processed 100 items")
            .with_location("src/lib.rs", 1, "bench::module");
        b.iter(|| logger.handle_message(black_box(event.clone())).unwrap());
    });

    group.bench_function("decorated_line", |b| {
        let mut logger = TerminalLogger::new(io::sink(), 80, true);
        let event = LogEvent::new(LogLevel::WARN, "e1", "cache miss rate elevated")
            .with_location("src/lib.rs", 1, "bench::module")
            .with_field("rate", 0.35);
        b.iter(|| logger.handle_message(black_box(event.clone())).unwrap());
    });

    group.bench_function("progress_frame", |b| {
        let mut logger = TerminalLogger::new(io::sink(), 80, true);
        let event = LogEvent::new(LogLevel::INFO, "e1", "downloading")
            .with_location("src/lib.rs", 1, "bench::module")
            .with_progress(0.5);
        b.iter(|| logger.handle_message(black_box(event.clone())).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_filtering, bench_rendering);
criterion_main!(benches);
