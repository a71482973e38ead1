//! Error types and definitions for projanitor
//!
//! Only `RootNotFound` ends a run. Everything raised while walking the tree is
//! recoverable and is reported as a warning before the walk moves on.

use std::backtrace::Backtrace;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Backtrace captured where an error was raised.
///
/// Held behind its own type name so `thiserror` does not try to provide it
/// through `Error::provide`, which is unstable.
#[derive(Debug)]
pub struct ErrorTrace(Backtrace);

impl ErrorTrace {
    pub fn capture() -> Self {
        ErrorTrace(Backtrace::capture())
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.0
    }
}

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    /// No marker file found within the bounded search
    #[error("Project root not found from {start} (markers: {})", .markers.join(", "))]
    RootNotFound {
        start: PathBuf,
        markers: Vec<String>,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// File content is not valid UTF-8
    #[error("Could not decode {path} as UTF-8")]
    DecodeFailure {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Reference pattern failed to compile
    #[error("Invalid reference pattern: {source}")]
    InvalidPattern {
        #[source]
        source: regex::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: ErrorTrace,
    },
}

impl AuditError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Recoverable while walking the tree
            AuditError::PermissionDenied { .. } => ErrorSeverity::Warning,
            AuditError::DecodeFailure { .. } => ErrorSeverity::Warning,
            AuditError::DirectoryTraversal { .. } => ErrorSeverity::Warning,

            AuditError::RootNotFound { .. } => ErrorSeverity::Critical,
            AuditError::InvalidPath { .. } => ErrorSeverity::Critical,
            AuditError::InvalidPattern { .. } => ErrorSeverity::Critical,
            AuditError::Config { .. } => ErrorSeverity::Critical,
            AuditError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            AuditError::ConfigRead { .. } => ErrorSeverity::Critical,
            AuditError::ConfigParse { .. } => ErrorSeverity::Critical,
            AuditError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Process exit code for a run that ended with this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::RootNotFound { .. } => 1,
            _ => match self.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            },
        }
    }

    /// Backtrace captured when the error was created
    #[cfg(not(tarpaulin_include))]
    pub fn backtrace(&self) -> &Backtrace {
        let trace = match self {
            AuditError::RootNotFound { backtrace, .. }
            | AuditError::Io { backtrace, .. }
            | AuditError::PermissionDenied { backtrace, .. }
            | AuditError::DecodeFailure { backtrace, .. }
            | AuditError::DirectoryTraversal { backtrace, .. }
            | AuditError::InvalidPath { backtrace, .. }
            | AuditError::InvalidPattern { backtrace, .. }
            | AuditError::Config { backtrace, .. }
            | AuditError::ConfigNotFound { backtrace, .. }
            | AuditError::ConfigRead { backtrace, .. }
            | AuditError::ConfigParse { backtrace, .. }
            | AuditError::OutputWrite { backtrace, .. }
            | AuditError::StdoutWrite { backtrace, .. }
            | AuditError::JsonSerialize { backtrace, .. }
            | AuditError::Csv { backtrace, .. } => backtrace,
        };
        trace.backtrace()
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AuditError::RootNotFound { start, markers, .. } => {
                format!(
                    "Project root could not be found near '{}'. None of [{}] exists within the search depth.",
                    start.display(),
                    markers.join(", ")
                )
            }
            AuditError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied. Skipping.", path.display())
            }
            AuditError::DecodeFailure { path, .. } => {
                format!("Could not decode '{}' as UTF-8. Skipping reference extraction.", path.display())
            }
            AuditError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            AuditError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            AuditError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create one with --init or drop the --config option.", path.display())
            }
            AuditError::OutputWrite { path, source, .. } => {
                format!("Could not write report to '{}': {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }

    /// Create the fatal "no root" error
    pub fn root_not_found(start: impl Into<PathBuf>, markers: &[String]) -> Self {
        AuditError::RootNotFound {
            start: start.into(),
            markers: markers.to_vec(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        AuditError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        AuditError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        AuditError::PermissionDenied {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create a decode failure error
    pub fn decode_failure(path: impl Into<PathBuf>) -> Self {
        AuditError::DecodeFailure {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        AuditError::InvalidPath {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AuditError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::io_error(err)
    }
}

impl From<regex::Error> for AuditError {
    fn from(err: regex::Error) -> Self {
        AuditError::InvalidPattern {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }
}

impl From<csv::Error> for AuditError {
    fn from(err: csv::Error) -> Self {
        AuditError::Csv {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: ErrorTrace::capture(),
        }
    }
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;
