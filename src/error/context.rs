//! Error context utilities
//!
//! Helpers for attaching path context to IO failures and for deciding whether
//! a failure is logged and skipped or propagated.

use std::io;
use std::path::Path;
use crate::error::{AuditError, ErrorSeverity, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| AuditError::Config {
            message: format!("{}: {}", context(), err),
            #[cfg(not(tarpaulin_include))]
            backtrace: crate::error::ErrorTrace::capture(),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let path = path.as_ref();
            let io_kind = (&err as &dyn std::error::Error)
                .downcast_ref::<io::Error>()
                .map(io::Error::kind);

            match io_kind {
                Some(io::ErrorKind::PermissionDenied) => AuditError::permission_denied(path),
                Some(io::ErrorKind::InvalidData) => AuditError::decode_failure(path),
                _ => AuditError::directory_traversal_error(path, err.to_string()),
            }
        })
    }
}

/// Log an error according to its severity.
///
/// Recoverable errors are emitted as warnings and swallowed; critical errors
/// are handed back so the caller can stop.
pub fn handle_error(err: AuditError) -> Option<AuditError> {
    match err.severity() {
        ErrorSeverity::Warning => {
            tracing::warn!("{}", err.user_message());
            None
        }
        ErrorSeverity::Error => {
            tracing::error!("{}", err.user_message());
            None
        }
        ErrorSeverity::Critical => Some(err),
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AuditError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AuditError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        match result.with_context(|| "Failed to read config") {
            Err(AuditError::Config { message, .. }) => {
                assert!(message.contains("Failed to read config"));
                assert!(message.contains("file not found"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_maps_io_kinds() {
        let denied: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(
            denied.with_file_context("src/a.c"),
            Err(AuditError::PermissionDenied { .. })
        ));

        let undecodable: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
        assert!(matches!(
            undecodable.with_file_context("src/a.c"),
            Err(AuditError::DecodeFailure { .. })
        ));

        let vanished: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match vanished.with_file_context("src/a.c") {
            Err(AuditError::DirectoryTraversal { path, .. }) => {
                assert_eq!(path.to_string_lossy(), "src/a.c");
            }
            other => panic!("Expected DirectoryTraversal error, got {:?}", other),
        }
    }

    #[test]
    fn test_handle_error_swallows_recoverable() {
        assert!(handle_error(AuditError::decode_failure("a.c")).is_none());
        assert!(handle_error(AuditError::io_error(io::Error::other("boom"))).is_none());

        let fatal = handle_error(AuditError::root_not_found("/tmp", &["LICENSE".to_string()]));
        assert!(matches!(fatal, Some(AuditError::RootNotFound { .. })));
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        match none.ok_or_error(|| AuditError::config_error("Missing value")) {
            Err(AuditError::Config { message, .. }) => assert_eq!(message, "Missing value"),
            other => panic!("Expected Config error, got {:?}", other),
        }

        assert_eq!(Some(42).ok_or_error(|| AuditError::config_error("unused")).unwrap(), 42);
    }
}
