//! Recording capability shared by all writers

use super::{call_site::CallSite, error::Result, severity::Severity};

/// Something that can durably record one log entry.
///
/// Implementations serialize their own callers: a single `record` call must
/// appear as one indivisible append to anyone reading the destination.
pub trait LogRecorder: Send + Sync {
    fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()>;
    fn name(&self) -> &str;
}
