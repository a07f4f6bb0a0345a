//! Writer metrics
//!
//! Counters for monitoring a writer without it ever logging about itself.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-writer counters
///
/// # Example
///
/// ```
/// use file_line_logger::WriterMetrics;
///
/// let metrics = WriterMetrics::new();
/// metrics.record_written(64);
/// metrics.record_failed();
///
/// assert_eq!(metrics.entries_written(), 1);
/// assert_eq!(metrics.bytes_written(), 64);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct WriterMetrics {
    entries_written: AtomicU64,
    bytes_written: AtomicU64,
    /// `record` calls that returned an error
    failed_writes: AtomicU64,
}

impl WriterMetrics {
    pub const fn new() -> Self {
        Self {
            entries_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_written(&self) -> u64 {
        self.entries_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a durable entry of `bytes` length
    #[inline]
    pub fn record_written(&self, bytes: usize) {
        self.entries_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Record a failed `record` call
    #[inline]
    pub fn record_failed(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for WriterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for WriterMetrics {
    /// Create a snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            entries_written: AtomicU64::new(self.entries_written()),
            bytes_written: AtomicU64::new(self.bytes_written()),
            failed_writes: AtomicU64::new(self.failed_writes()),
        }
    }
}
