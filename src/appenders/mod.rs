//! Writer implementations

#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod memory;
pub mod null;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;
pub use file::{FileLogWriter, FileLogWriterBuilder};
pub use memory::MemoryWriter;
pub use null::NullWriter;

pub use crate::core::LogRecorder;
