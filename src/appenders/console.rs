//! Console writer implementation

use crate::core::{
    render, CallSite, Clock, CompiledTimestamp, LogRecorder, Result, Severity, SystemClock,
    TimestampFormat,
};
use colored::Colorize;
use std::io::Write;

/// Writes entries to stdout, or stderr for `Error`, with optional colors.
pub struct ConsoleWriter {
    use_colors: bool,
    timestamp: CompiledTimestamp,
    clock: Box<dyn Clock>,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp: CompiledTimestamp::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Set the timestamp format for this writer
    ///
    /// # Examples
    ///
    /// ```
    /// use file_line_logger::appenders::ConsoleWriter;
    /// use file_line_logger::TimestampFormat;
    ///
    /// let writer = ConsoleWriter::new()
    ///     .with_timestamp_format(TimestampFormat::Pattern("HH:mm:ss.SSS".to_string()))
    ///     .unwrap();
    /// ```
    pub fn with_timestamp_format(self, format: TimestampFormat) -> Result<Self> {
        let timestamp = format.compile()?;
        Ok(Self { timestamp, ..self })
    }

    /// The line as it will be printed, colored when enabled.
    fn format_line(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> String {
        let timestamp = self.timestamp.format(&self.clock.now());
        let line = render(&timestamp, severity, call_site, message);
        if self.use_colors {
            format!("{}\n", line.trim_end_matches('\n').color(severity.color_code()))
        } else {
            line
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRecorder for ConsoleWriter {
    fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()> {
        let line = self.format_line(message, call_site, severity);

        // The std handle locks keep concurrent entries from interleaving
        let result = match severity {
            Severity::Error => {
                let mut err = std::io::stderr().lock();
                err.write_all(line.as_bytes()).and_then(|_| err.flush())
            }
            _ => {
                let mut out = std::io::stdout().lock();
                out.write_all(line.as_bytes()).and_then(|_| out.flush())
            }
        };
        result.map_err(|e| crate::core::LoggerError::write("<console>", "write", e))
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_plain_line_matches_file_layout() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 1, 2, 3, 4, 5)
            .unwrap();
        let writer = ConsoleWriter {
            clock: Box::new(FixedClock(dt)),
            ..ConsoleWriter::with_colors(false)
        };

        let line = writer.format_line("hello", &CallSite::new("src/app.rs", 9, "run"), Severity::Info);
        assert_eq!(line, "2020-01-02T03:04:05.000+0000 | Info | app.rs:9 | run - hello\n");
    }

    #[test]
    fn test_record_succeeds() {
        let writer = ConsoleWriter::with_colors(false);
        let site = CallSite::new("a.rs", 1, "f");
        assert!(writer.record("to stdout", &site, Severity::Info).is_ok());
        assert!(writer.record("to stderr", &site, Severity::Error).is_ok());
    }
}
