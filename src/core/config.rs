//! Construction-time writer configuration

use super::encoding::TextEncoding;
use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options fixed when a [`FileLogWriter`](crate::FileLogWriter) is opened.
///
/// # Examples
///
/// ```
/// use file_line_logger::{TextEncoding, WriterConfig};
///
/// let config = WriterConfig::from_json_str(
///     r#"{ "path": "/var/log/app.log", "encoding": "ascii" }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.encoding, TextEncoding::Ascii);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Destination file; its parent directory must already exist
    pub path: PathBuf,
    #[serde(default)]
    pub encoding: TextEncoding,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

impl WriterConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: TextEncoding::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(
                "WriterConfig",
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Check everything that can be checked without touching the file.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LoggerError::config("WriterConfig", "path must not be empty"));
        }
        self.timestamp_format.compile()?;
        Ok(())
    }
}
