//! Logging macros that capture the call site.
//!
//! Each severity macro formats its arguments like `format!`, captures the
//! file, line and enclosing function where it is written, and forwards to the
//! matching [`Log`](crate::Log) method. The `Result` of the write is returned.
//!
//! # Examples
//!
//! ```
//! use file_line_logger::{info, warning, Log, MemoryWriter};
//!
//! let log = Log::new(MemoryWriter::new());
//!
//! info!(log, "Server started").unwrap();
//!
//! let port = 8080;
//! warning!(log, "Port {} already in use, retrying", port).unwrap();
//! ```

/// Build a [`CallSite`](crate::CallSite) for the current location.
///
/// # Examples
///
/// ```
/// use file_line_logger::call_site;
///
/// fn handler() {
///     let site = call_site!();
///     assert!(site.file.ends_with(".rs"));
///     assert_eq!(site.function, "handler");
/// }
///
/// handler();
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(
            file!(),
            line!(),
            $crate::core::call_site::function_name_from_type_name(__type_name_of(__f)),
        )
    }};
}

/// Record a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use file_line_logger::{Log, NullWriter, Severity};
/// # let log = Log::new(NullWriter::new());
/// use file_line_logger::log;
/// log!(log, Severity::Info, "Simple message").unwrap();
/// log!(log, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.record(&format!($($arg)+), &$crate::call_site!(), $severity)
    };
}

/// Record a verbose message.
///
/// ```
/// # use file_line_logger::{Log, NullWriter};
/// # let log = Log::new(NullWriter::new());
/// use file_line_logger::verbose;
/// verbose!(log, "Entering calculate()").unwrap();
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Record a debug message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Record an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Record a warning message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Record an error message.
///
/// ```
/// # use file_line_logger::{Log, NullWriter};
/// # let log = Log::new(NullWriter::new());
/// use file_line_logger::error;
/// error!(log, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Log, Severity};
    use crate::MemoryWriter;
    use std::sync::Arc;

    fn memory_log() -> (Arc<MemoryWriter>, Log) {
        let memory = Arc::new(MemoryWriter::new());
        let log = Log::from_shared(memory.clone());
        (memory, log)
    }

    #[test]
    fn test_log_macro() {
        let (memory, log) = memory_log();
        log!(log, Severity::Info, "Formatted: {}", 42).unwrap();
        assert!(memory.entries()[0].ends_with(" | test_log_macro - Formatted: 42\n"));
    }

    #[test]
    fn test_severity_macros_capture_call_site() {
        let (memory, log) = memory_log();

        verbose!(log, "v").unwrap();
        debug!(log, "d {}", 1).unwrap();
        info!(log, "i").unwrap();
        warning!(log, "w").unwrap();
        error!(log, "e").unwrap();

        let entries = memory.entries();
        assert_eq!(entries.len(), 5);
        for (entry, severity) in entries.iter().zip(Severity::ALL) {
            assert!(entry.contains(&format!(" | {} | macros.rs:", severity)));
            assert!(entry.contains(" | test_severity_macros_capture_call_site - "));
        }
    }

    #[test]
    fn test_call_site_line_is_the_macro_line() {
        let (memory, log) = memory_log();
        let expected = line!() + 1;
        info!(log, "here").unwrap();
        assert!(memory.entries()[0].contains(&format!("macros.rs:{} |", expected)));
    }

    #[test]
    fn test_call_site_inside_closure() {
        let (memory, log) = memory_log();
        let run = || info!(log, "from closure");
        run().unwrap();
        assert!(memory.entries()[0].contains(" | test_call_site_inside_closure - "));
    }
}
