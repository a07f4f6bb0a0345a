//! Bridge from the `log` crate facade
//!
//! Routes `log::info!` and friends from any dependency into a [`Log`].
//!
//! ```no_run
//! use file_line_logger::bridge::LogBridge;
//! use file_line_logger::{FileLogWriter, Log};
//!
//! let log = Log::new(FileLogWriter::open("app.log").unwrap());
//! LogBridge::new(log).install(log::LevelFilter::Debug).unwrap();
//!
//! log::info!("routed through the bridge");
//! ```

use crate::core::{CallSite, Log, Severity};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::atomic::{AtomicU64, Ordering};

/// Map a `log` level onto the closest severity.
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Trace => Severity::Verbose,
        Level::Debug => Severity::Debug,
        Level::Info => Severity::Info,
        Level::Warn => Severity::Warning,
        Level::Error => Severity::Error,
    }
}

/// A `log::Log` implementation writing through a [`Log`] facade.
///
/// `log::Log::log` cannot report failures, so failed writes are only counted.
/// Byte totals live on the underlying writer's metrics.
pub struct LogBridge {
    log: Log,
    forwarded: AtomicU64,
    dropped: AtomicU64,
}

impl LogBridge {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            forwarded: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    /// Records the writer accepted.
    pub fn forwarded(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    /// Records lost to a failed write.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Register as the global logger.
    pub fn install(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let call_site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            // Lines are 1-based; records without one point at the top of the file
            record.line().filter(|&line| line > 0).unwrap_or(1),
            record.module_path().unwrap_or(record.target()),
        );
        let message = record.args().to_string();

        let counter = match self.log.record(&message, &call_site, severity_for(record.level())) {
            Ok(()) => &self.forwarded,
            Err(_) => &self.dropped,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn flush(&self) {}
}
