//! Criterion benchmarks for file_line_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use file_line_logger::prelude::*;
use file_line_logger::render;
use tempfile::TempDir;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let site = CallSite::new("/src/App.ext", 42, "run");

    group.bench_function("short_message", |b| {
        b.iter(|| {
            render(
                black_box("2020-01-02T03:04:05.006+0000"),
                Severity::Info,
                &site,
                black_box("Message!"),
            )
        });
    });

    let long_message = "payload ".repeat(64);
    group.bench_function("long_message", |b| {
        b.iter(|| {
            render(
                black_box("2020-01-02T03:04:05.006+0000"),
                Severity::Warning,
                &site,
                black_box(&long_message),
            )
        });
    });

    group.finish();
}

fn bench_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp");
    let now = chrono::Local::now().fixed_offset();

    for (name, format) in [
        ("iso8601", TimestampFormat::Iso8601),
        ("pattern", TimestampFormat::Pattern("yyyy-MM-dd'T'HH:mm:ss.SSSZ".to_string())),
        ("unix_millis", TimestampFormat::UnixMillis),
    ] {
        let compiled = format.compile().expect("valid format");
        group.bench_function(name, |b| b.iter(|| compiled.format(black_box(&now))));
    }

    group.finish();
}

// ============================================================================
// Writer Benchmarks
// ============================================================================

fn bench_writers(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Elements(1));

    let site = CallSite::new("src/bench.rs", 1, "bench");

    let null = Log::new(NullWriter::new());
    group.bench_function("null", |b| {
        b.iter(|| null.info(black_box("Info message"), &site));
    });

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = Log::new(
        FileLogWriter::open(temp_dir.path().join("bench.log")).expect("Failed to open writer"),
    );
    group.sample_size(20);
    group.bench_function("file_synced", |b| {
        b.iter(|| file.info(black_box("Info message"), &site));
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_timestamp, bench_writers);
criterion_main!(benches);
