//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod encoding;
pub mod error;
pub mod facade;
pub mod log_entry;
pub mod metrics;
pub mod recorder;
pub mod severity;
pub mod timestamp;

pub use call_site::CallSite;
pub use config::WriterConfig;
pub use encoding::TextEncoding;
pub use error::{ErrorKind, LoggerError, Result};
pub use facade::Log;
pub use log_entry::{basename, render, LogEntry};
pub use metrics::WriterMetrics;
pub use recorder::LogRecorder;
pub use severity::Severity;
pub use timestamp::{
    Clock, CompiledTimestamp, FixedClock, PatternSegment, SystemClock, TimestampFormat,
};
