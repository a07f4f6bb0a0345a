//! File writer implementation

use crate::core::{
    render, CallSite, Clock, CompiledTimestamp, LogRecorder, LoggerError, Result, Severity,
    SystemClock, TextEncoding, TimestampFormat, WriterConfig, WriterMetrics,
};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one line per entry to a file, syncing after every write.
///
/// The file is opened once, in append-or-create mode, and stays open for the
/// writer's lifetime. Existing content is never truncated or rewritten. A
/// single lock covers timestamp, rendering, encoding, write and sync, so
/// concurrent callers never interleave partial entries.
pub struct FileLogWriter {
    path: PathBuf,
    file: Mutex<File>,
    encoding: TextEncoding,
    timestamp: CompiledTimestamp,
    clock: Box<dyn Clock>,
    metrics: WriterMetrics,
}

impl FileLogWriter {
    /// Open `path` with UTF-8 output and the default ISO 8601 timestamps.
    ///
    /// The parent directory must exist; it is never created.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::FileOpen`] if the file cannot be opened for appending.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(path).open()
    }

    pub fn from_config(config: &WriterConfig) -> Result<Self> {
        config.validate()?;
        Self::builder(config.path.clone())
            .encoding(config.encoding)
            .timestamp_format(config.timestamp_format.clone())
            .open()
    }

    pub fn builder(path: impl Into<PathBuf>) -> FileLogWriterBuilder {
        FileLogWriterBuilder::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn metrics(&self) -> &WriterMetrics {
        &self.metrics
    }

    fn append(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<usize> {
        let mut file = self.file.lock();

        let timestamp = self.timestamp.format(&self.clock.now());
        let line = render(&timestamp, severity, call_site, message);
        let bytes = self.encoding.encode(&line)?;

        file.write_all(&bytes)
            .map_err(|e| LoggerError::write(&self.path, "write", e))?;
        file.flush()
            .map_err(|e| LoggerError::write(&self.path, "flush", e))?;
        file.sync_data()
            .map_err(|e| LoggerError::write(&self.path, "sync", e))?;

        Ok(bytes.len())
    }
}

impl LogRecorder for FileLogWriter {
    fn record(&self, message: &str, call_site: &CallSite<'_>, severity: Severity) -> Result<()> {
        match self.append(message, call_site, severity) {
            Ok(written) => {
                self.metrics.record_written(written);
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl fmt::Debug for FileLogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogWriter")
            .field("path", &self.path)
            .field("encoding", &self.encoding)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FileLogWriter`]
///
/// # Examples
///
/// ```no_run
/// use file_line_logger::{FileLogWriter, TextEncoding, TimestampFormat};
///
/// let writer = FileLogWriter::builder("/var/log/app.log")
///     .encoding(TextEncoding::Latin1)
///     .timestamp_format(TimestampFormat::Pattern("yyyy-MM-dd HH:mm:ss".to_string()))
///     .open()
///     .unwrap();
/// ```
pub struct FileLogWriterBuilder {
    path: PathBuf,
    encoding: TextEncoding,
    timestamp_format: TimestampFormat,
    clock: Option<Box<dyn Clock>>,
}

impl FileLogWriterBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: TextEncoding::default(),
            timestamp_format: TimestampFormat::default(),
            clock: None,
        }
    }

    #[must_use]
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the wall clock, mostly useful for deterministic output in tests.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate the options and open the file.
    ///
    /// Configuration is checked before the file is touched, so a rejected
    /// timestamp pattern never creates a file.
    pub fn open(self) -> Result<FileLogWriter> {
        let timestamp = self.timestamp_format.compile()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file_open(&self.path, e))?;

        Ok(FileLogWriter {
            path: self.path,
            file: Mutex::new(file),
            encoding: self.encoding,
            timestamp,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            metrics: WriterMetrics::new(),
        })
    }
}
