//! Error types for the logger system

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Broad classification of a [`LoggerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The log file could not be opened at construction.
    FileOpen,
    /// A single `record` call failed; the writer is still usable.
    Write,
    /// Rejected construction-time configuration.
    Configuration,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log file could not be opened or created for appending
    #[error("Could not open log file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write, flush or sync of an entry failed
    #[error("Failed to {operation} log entry to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Entry contains a character the configured encoding cannot represent
    #[error("Cannot encode {character:?} as {encoding}")]
    Encoding {
        encoding: &'static str,
        character: char,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given stage (`write`, `flush`, `sync`)
    pub fn write(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        LoggerError::Write {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Create an encoding error
    pub fn encoding(encoding: &'static str, character: char) -> Self {
        LoggerError::Encoding {
            encoding,
            character,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoggerError::FileOpen { .. } => ErrorKind::FileOpen,
            LoggerError::Write { .. } | LoggerError::Encoding { .. } => ErrorKind::Write,
            LoggerError::InvalidConfiguration { .. } | LoggerError::Json(_) => {
                ErrorKind::Configuration
            }
        }
    }

    /// True for failures of a single `record` call.
    pub fn is_write_error(&self) -> bool {
        self.kind() == ErrorKind::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::file_open(
            "/var/log/app.log",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, LoggerError::FileOpen { .. }));
        assert_eq!(err.kind(), ErrorKind::FileOpen);

        let err = LoggerError::config("TimestampFormat", "Unknown field");
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = LoggerError::encoding("ascii", 'é');
        assert!(err.is_write_error());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_open(
            "/Foo/bar",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Could not open log file '/Foo/bar': No such file or directory"
        );

        let err = LoggerError::encoding("ascii", 'é');
        assert_eq!(err.to_string(), "Cannot encode 'é' as ascii");

        let err = LoggerError::config("TextEncoding", "unsupported encoding 'koi8-r'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for TextEncoding: unsupported encoding 'koi8-r'"
        );
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
        let err = LoggerError::write("/tmp/app.log", "write", io_err);

        assert!(err.is_write_error());
        assert!(err.to_string().contains("Failed to write log entry"));
        assert!(err.source().is_some());
    }
}
