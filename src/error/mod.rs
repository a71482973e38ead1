//! Error handling for projanitor
//!
//! This module provides the error type shared by every stage of an audit,
//! the result alias, and helpers for attaching context and deciding whether
//! a failure is recoverable.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt, handle_error};
pub use types::{AuditError, ErrorSeverity, ErrorTrace, Result};
