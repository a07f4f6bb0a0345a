//! Stress tests for concurrent appends
//!
//! These tests verify:
//! - Entries from many threads never interleave within a line
//! - Every successful record call produces exactly one line
//! - Per-thread call order is preserved in the file

use file_line_logger::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn test_concurrent_records_do_not_interleave() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let log = Log::new(FileLogWriter::open(&log_file).expect("Failed to open writer"));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = log.clone();
            thread::spawn(move || {
                let site = CallSite::new("src/worker.rs", 10 + t as u32, format!("worker_{t}"));
                // Long payload makes a torn write easy to spot
                let padding = "x".repeat(512);
                for i in 0..PER_THREAD {
                    log.info(&format!("thread={t} seq={i} {padding}"), &site)
                        .expect("record failed");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut next_seq: HashMap<usize, usize> = HashMap::new();
    for line in lines {
        let fields: Vec<&str> = line.splitn(4, " | ").collect();
        assert_eq!(fields.len(), 4, "malformed line: {line}");
        assert_eq!(fields[1], "Info");

        let (function, message) = fields[3].split_once(" - ").expect("missing message");
        let t: usize = function.trim_start_matches("worker_").parse().unwrap();
        assert_eq!(fields[2], format!("worker.rs:{}", 10 + t));

        let mut parts = message.split(' ');
        assert_eq!(parts.next(), Some(format!("thread={t}").as_str()));
        let seq: usize = parts
            .next()
            .and_then(|s| s.strip_prefix("seq="))
            .and_then(|s| s.parse().ok())
            .expect("missing seq");
        assert_eq!(parts.next().map(str::len), Some(512));

        let expected = next_seq.entry(t).or_insert(0);
        assert_eq!(seq, *expected, "out of order for thread {t}");
        *expected += 1;
    }
}

#[test]
fn test_shared_writer_metrics_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("metrics.log");

    let writer = Arc::new(FileLogWriter::open(&log_file).unwrap());

    thread::scope(|scope| {
        for t in 0..THREADS {
            let log = Log::from_shared(writer.clone());
            scope.spawn(move || {
                let site = CallSite::new("a.rs", 1, "f");
                for severity in Severity::ALL {
                    log.record(&format!("{t}"), &site, severity).unwrap();
                }
            });
        }
    });

    let expected = (THREADS * Severity::ALL.len()) as u64;
    assert_eq!(writer.metrics().entries_written(), expected);
    assert_eq!(writer.metrics().failed_writes(), 0);

    let file_len = std::fs::metadata(&log_file).unwrap().len();
    assert_eq!(writer.metrics().bytes_written(), file_len);
}
