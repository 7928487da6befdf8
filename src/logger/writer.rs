//! Log writer module
//!
//! Thread-safe, timestamped log writing to stdout/stderr or a log file.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Info log target
    info: LogTarget,
    /// Error log target
    error: LogTarget,
    /// Suppress info-level output (level is warn or error)
    quiet: bool,
}

impl LogWriter {
    /// Create a new log writer with an optional file path
    ///
    /// When a file is configured, info and error output both go to it.
    fn new(log_file: Option<&str>, quiet: bool) -> io::Result<Self> {
        let (info, error) = match log_file {
            Some(path) => {
                let file = open_log_file(path)?;
                let errors = open_log_file(path)?;
                (
                    LogTarget::File(Mutex::new(file)),
                    LogTarget::File(Mutex::new(errors)),
                )
            }
            None => (LogTarget::Stdout, LogTarget::Stderr),
        };

        Ok(Self { info, error, quiet })
    }

    /// Write info message
    pub fn write_info(&self, message: &str) {
        if !self.quiet {
            write_to_target(&self.info, message);
        }
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write a timestamped message to a log target
fn write_to_target(target: &LogTarget, message: &str) {
    let line = format!("{} {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    match target {
        LogTarget::Stdout => {
            println!("{line}");
        }
        LogTarget::Stderr => {
            eprintln!("{line}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if the log file cannot be opened.
pub fn init(log_file: Option<&str>, quiet: bool) -> io::Result<()> {
    let writer = LogWriter::new(log_file, quiet)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer
///
/// Panics if `init()` has not been called.
pub fn get() -> &'static LogWriter {
    LOG_WRITER
        .get()
        .expect("Log writer not initialized. Call logger::init() first.")
}

/// Check if the log writer has been initialized
pub fn is_initialized() -> bool {
    LOG_WRITER.get().is_some()
}
