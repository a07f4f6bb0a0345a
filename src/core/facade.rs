//! Severity facade over a single writer

use super::{
    call_site::CallSite, error::Result, recorder::LogRecorder, severity::Severity,
};
use std::fmt;
use std::sync::Arc;

/// One method per severity, each forwarding to the wrapped writer unchanged.
///
/// The writer is fixed at construction. Nothing is buffered, filtered or
/// transformed here; errors from the writer are returned to the caller.
///
/// # Examples
///
/// ```
/// use file_line_logger::{call_site, Log, MemoryWriter};
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryWriter::new());
/// let log = Log::from_shared(memory.clone());
///
/// log.info("Server started", &call_site!()).unwrap();
/// assert!(memory.entries()[0].contains("| Info |"));
/// ```
#[derive(Clone)]
pub struct Log {
    writer: Arc<dyn LogRecorder>,
}

impl Log {
    pub fn new(writer: impl LogRecorder + 'static) -> Self {
        Self {
            writer: Arc::new(writer),
        }
    }

    pub fn from_shared(writer: Arc<dyn LogRecorder>) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &Arc<dyn LogRecorder> {
        &self.writer
    }

    #[inline]
    pub fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()> {
        self.writer.record(message, call_site, severity)
    }

    #[inline]
    pub fn verbose(&self, message: &str, call_site: &CallSite<'_>) -> Result<()> {
        self.record(message, call_site, Severity::Verbose)
    }

    #[inline]
    pub fn debug(&self, message: &str, call_site: &CallSite<'_>) -> Result<()> {
        self.record(message, call_site, Severity::Debug)
    }

    #[inline]
    pub fn info(&self, message: &str, call_site: &CallSite<'_>) -> Result<()> {
        self.record(message, call_site, Severity::Info)
    }

    #[inline]
    pub fn warning(&self, message: &str, call_site: &CallSite<'_>) -> Result<()> {
        self.record(message, call_site, Severity::Warning)
    }

    #[inline]
    pub fn error(&self, message: &str, call_site: &CallSite<'_>) -> Result<()> {
        self.record(message, call_site, Severity::Error)
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("writer", &self.writer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Captured {
        calls: Mutex<Vec<(String, String, u32, String, Severity)>>,
    }

    impl LogRecorder for Captured {
        fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()> {
            self.calls.lock().push((
                message.to_string(),
                call_site.file.to_string(),
                call_site.line,
                call_site.function.to_string(),
                severity,
            ));
            Ok(())
        }

        fn name(&self) -> &str {
            "captured"
        }
    }

    #[test]
    fn test_each_method_fixes_severity() {
        let captured = Arc::new(Captured::default());
        let log = Log::from_shared(captured.clone());
        let site = CallSite::new("/src/App.ext", 42, "run");

        log.verbose("v", &site).unwrap();
        log.debug("d", &site).unwrap();
        log.info("i", &site).unwrap();
        log.warning("w", &site).unwrap();
        log.error("e", &site).unwrap();

        let calls = captured.calls.lock();
        let severities: Vec<_> = calls.iter().map(|c| c.4).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert_eq!(calls[2].0, "i");
    }

    #[test]
    fn test_call_site_forwarded_unchanged() {
        let captured = Arc::new(Captured::default());
        let log = Log::from_shared(captured.clone());

        log.info("m", &CallSite::new("/a/b/Foo.ext", 7, "handler")).unwrap();

        let calls = captured.calls.lock();
        assert_eq!(calls[0].1, "/a/b/Foo.ext");
        assert_eq!(calls[0].2, 7);
        assert_eq!(calls[0].3, "handler");
    }

    #[test]
    fn test_clones_share_writer() {
        let captured = Arc::new(Captured::default());
        let log = Log::from_shared(captured.clone());
        let other = log.clone();

        log.info("a", &CallSite::new("f.rs", 1, "f")).unwrap();
        other.info("b", &CallSite::new("f.rs", 2, "f")).unwrap();

        assert_eq!(captured.calls.lock().len(), 2);
        assert_eq!(format!("{:?}", log), "Log { writer: \"captured\" }");
    }
}
