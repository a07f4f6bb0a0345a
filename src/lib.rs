//! # File Line Logger
//!
//! A minimal leveled text logger. Every entry becomes one human-readable line
//! appended to a file and synced to storage before the call returns:
//!
//! ```text
//! 2020-01-02T03:04:05.006+0000 | Info | App.ext:42 | run - Message!
//! ```
//!
//! ## Features
//!
//! - **Fixed layout**: timestamp, severity, `file:line`, function and message
//! - **Synchronous**: each entry is written and synced under a per-writer lock
//! - **Swappable writers**: file, in-memory, discard and console behind [`LogRecorder`]
//! - **Call-site capture**: `info!(log, ...)` records where it was written
//!
//! ## Example
//!
//! ```no_run
//! use file_line_logger::prelude::*;
//! use file_line_logger::{error, info};
//!
//! fn main() -> Result<()> {
//!     let log = Log::new(FileLogWriter::open("application.log")?);
//!
//!     info!(log, "Application started")?;
//!     error!(log, "Failed to load plugin {}", "metrics")?;
//!     Ok(())
//! }
//! ```

pub mod appenders;
#[cfg(feature = "log-bridge")]
pub mod bridge;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FileLogWriter, MemoryWriter, NullWriter};
    pub use crate::core::{
        CallSite, Clock, ErrorKind, Log, LogRecorder, LoggerError, Result, Severity,
        TextEncoding, TimestampFormat, WriterConfig, WriterMetrics,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleWriter;
pub use appenders::{FileLogWriter, FileLogWriterBuilder, MemoryWriter, NullWriter};
pub use crate::core::{
    basename, render, CallSite, Clock, CompiledTimestamp, ErrorKind, FixedClock, Log, LogEntry,
    LogRecorder, LoggerError, PatternSegment, Result, Severity, SystemClock, TextEncoding,
    TimestampFormat, WriterConfig, WriterMetrics,
};
