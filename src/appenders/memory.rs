//! In-memory writer

use crate::core::{
    render, CallSite, Clock, CompiledTimestamp, LogRecorder, Result, Severity, SystemClock,
    TimestampFormat,
};
use parking_lot::Mutex;

/// Keeps rendered entries in memory, for tests and diagnostics.
///
/// Entries use exactly the same layout as [`FileLogWriter`](super::FileLogWriter).
pub struct MemoryWriter {
    entries: Mutex<Vec<String>>,
    timestamp: CompiledTimestamp,
    clock: Box<dyn Clock>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            timestamp: CompiledTimestamp::default(),
            clock: Box::new(clock),
        }
    }

    /// Use a different timestamp format.
    pub fn with_timestamp_format(self, format: TimestampFormat) -> Result<Self> {
        let timestamp = format.compile()?;
        Ok(Self { timestamp, ..self })
    }

    /// Rendered entries in record order, each ending in `\n`.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Everything recorded so far, as it would appear in a file.
    pub fn contents(&self) -> String {
        self.entries.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for MemoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRecorder for MemoryWriter {
    fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()> {
        let mut entries = self.entries.lock();
        let timestamp = self.timestamp.format(&self.clock.now());
        entries.push(render(&timestamp, severity, call_site, message));
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
