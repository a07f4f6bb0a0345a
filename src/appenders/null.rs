//! Writer that discards every entry

use crate::core::{CallSite, LogRecorder, Result, Severity};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullWriter;

impl NullWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LogRecorder for NullWriter {
    fn record(&self, _message: &str, _call_site: &CallSite<'_>, _severity: Severity) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
