//! Log entry layout
//!
//! One entry renders to exactly one line:
//!
//! ```text
//! <timestamp> | <Severity> | <file>:<line> | <function> - <message>\n
//! ```
//!
//! The message and function name are written verbatim. A message containing
//! ` | ` or a newline will break the visual structure of the line; callers that
//! split lines on the delimiters must account for that.

use super::call_site::CallSite;
use super::severity::Severity;
use std::fmt;

/// Separator between the leading fields.
pub const FIELD_DELIMITER: &str = " | ";
/// Separator between the function name and the message.
pub const MESSAGE_DELIMITER: &str = " - ";
/// Line terminator.
pub const LINE_TERMINATOR: &str = "\n";

/// A single entry, borrowed from the caller for the duration of rendering.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    pub timestamp: &'a str,
    pub severity: Severity,
    pub call_site: &'a CallSite<'a>,
    pub message: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(
        timestamp: &'a str,
        severity: Severity,
        call_site: &'a CallSite<'a>,
        message: &'a str,
    ) -> Self {
        Self {
            timestamp,
            severity,
            call_site,
            message,
        }
    }
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}:{}{FIELD_DELIMITER}{}{MESSAGE_DELIMITER}{}{LINE_TERMINATOR}",
            self.timestamp,
            self.severity.display_name(),
            basename(&self.call_site.file),
            self.call_site.line,
            self.call_site.function,
            self.message,
        )
    }
}

/// Render one log line, terminator included.
pub fn render(timestamp: &str, severity: Severity, call_site: &CallSite<'_>, message: &str) -> String {
    LogEntry::new(timestamp, severity, call_site, message).to_string()
}

/// Final component of a path; both `/` and `\` count as separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}
