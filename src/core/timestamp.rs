//! Timestamp formatting utilities
//!
//! The timestamp pattern is fixed when a writer is built. Patterns are
//! validated and compiled up front so that formatting an entry never fails.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use file_line_logger::core::TimestampFormat;
///
/// // Default: 2020-01-02T03:04:05.006+0000
/// let format = TimestampFormat::default();
///
/// // The same layout, written as a Unicode date pattern
/// let format = TimestampFormat::Pattern("yyyy-MM-dd'T'HH:mm:ss.SSSZ".to_string());
///
/// // Any chrono strftime string
/// let format = TimestampFormat::Strftime("%d/%b/%Y:%H:%M:%S %z".to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds and numeric offset: `2020-01-02T03:04:05.006+0000`
    #[default]
    Iso8601,

    /// RFC 3339: `2020-01-02T03:04:05.006+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1577934245006`
    UnixMillis,

    /// Unicode (LDML) date pattern, e.g. `yyyy-MM-dd'T'HH:mm:ss.SSSZ`
    Pattern(String),

    /// chrono strftime format string
    Strftime(String),
}

impl TimestampFormat {
    /// Validate the format and prepare it for repeated use.
    pub fn compile(&self) -> Result<CompiledTimestamp> {
        match self {
            TimestampFormat::Iso8601 => Ok(CompiledTimestamp::default()),
            TimestampFormat::Rfc3339 => Ok(CompiledTimestamp::Rfc3339),
            TimestampFormat::UnixMillis => Ok(CompiledTimestamp::UnixMillis),
            TimestampFormat::Pattern(pattern) => {
                let segments = pattern_to_segments(pattern)?;
                for segment in &segments {
                    if let PatternSegment::Strftime(format_str) = segment {
                        validate_strftime(format_str)?;
                    }
                }
                match segments.as_slice() {
                    [PatternSegment::Strftime(format_str)] => {
                        Ok(CompiledTimestamp::Strftime(format_str.clone()))
                    }
                    _ => Ok(CompiledTimestamp::Segments(segments)),
                }
            }
            TimestampFormat::Strftime(format_str) => {
                validate_strftime(format_str)?;
                Ok(CompiledTimestamp::Strftime(format_str.clone()))
            }
        }
    }
}

/// A validated timestamp format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledTimestamp {
    Strftime(String),
    /// Date pattern with second fractions chrono cannot express directly
    Segments(Vec<PatternSegment>),
    Rfc3339,
    UnixMillis,
}

/// Piece of a compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Strftime(String),
    /// Fraction of a second truncated to this many digits (1..=9)
    Fraction(usize),
}

impl Default for CompiledTimestamp {
    fn default() -> Self {
        CompiledTimestamp::Strftime(ISO8601_MILLIS.to_string())
    }
}

impl CompiledTimestamp {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            CompiledTimestamp::Strftime(format_str) => datetime.format(format_str).to_string(),
            CompiledTimestamp::Segments(segments) => {
                let mut out = String::new();
                for segment in segments {
                    match segment {
                        PatternSegment::Strftime(format_str) => {
                            let _ = write!(out, "{}", datetime.format(format_str));
                        }
                        PatternSegment::Fraction(digits) => {
                            // Leap seconds report nanos past 1_000_000_000
                            let nanos = datetime.timestamp_subsec_nanos() % 1_000_000_000;
                            let _ = write!(out, "{:09}", nanos);
                            out.truncate(out.len() - (9 - digits));
                        }
                    }
                }
                out
            }
            CompiledTimestamp::Rfc3339 => {
                datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, false)
            }
            CompiledTimestamp::UnixMillis => datetime.timestamp_millis().to_string(),
        }
    }
}

fn validate_strftime(format_str: &str) -> Result<()> {
    if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::config(
            "TimestampFormat",
            format!("invalid strftime format '{}'", format_str),
        ));
    }
    Ok(())
}

/// Translate a Unicode date pattern into strftime runs and second fractions.
fn pattern_to_segments(pattern: &str) -> Result<Vec<PatternSegment>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut segments = Vec::new();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' is a literal quote, otherwise quote until the closing '
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            loop {
                match chars.get(i) {
                    None => {
                        return Err(LoggerError::config(
                            "TimestampFormat",
                            format!("unterminated quote in pattern '{}'", pattern),
                        ))
                    }
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        out.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&literal) => {
                        push_literal(&mut out, literal);
                        i += 1;
                    }
                }
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&n| n == c).count();
        if c == 'S' && run <= 9 {
            if !out.is_empty() {
                segments.push(PatternSegment::Strftime(std::mem::take(&mut out)));
            }
            segments.push(PatternSegment::Fraction(run));
            i += run;
            continue;
        }
        let field = match (c, run) {
            ('y', 2) => "%y",
            ('y', _) => "%Y",
            ('M', 1) => "%-m",
            ('M', 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', 1) => "%-d",
            ('d', 2) => "%d",
            ('H', 1) => "%-H",
            ('H', 2) => "%H",
            ('h', 1) => "%-I",
            ('h', 2) => "%I",
            ('m', 1) => "%-M",
            ('m', 2) => "%M",
            ('s', 1) => "%-S",
            ('s', 2) => "%S",
            ('a', 1) => "%p",
            ('E', 1..=3) => "%a",
            ('E', 4) => "%A",
            ('Z', 1..=3) => "%z",
            ('Z', 5) => "%:z",
            _ => {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!(
                        "unsupported field '{}' in pattern '{}'",
                        c.to_string().repeat(run),
                        pattern
                    ),
                ))
            }
        };
        out.push_str(field);
        i += run;
    }

    if !out.is_empty() || segments.is_empty() {
        segments.push(PatternSegment::Strftime(out));
    }
    Ok(segments)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Source of the current time for new entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
