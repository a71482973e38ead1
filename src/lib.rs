//! projanitor - a project structure auditor for CMake-based C projects
//!
//! This library locates a project root from marker files, catalogs the files
//! of interest below it in a single traversal, and cross-references them with
//! the includes, build-script mentions and Python imports found on the way to
//! report orphaned files, missing references and duplicate basenames.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Analyzer, Auditor, RootLocator, Walker};
pub use error::{AuditError, ErrorSeverity, OptionExt, Result, ResultExt, handle_error};
pub use models::{
    analysis::{AuditReport, Findings, Statistics},
    catalog::{Catalog, FileRecord, ReferenceEdges},
    config::{OutputFormat, Settings},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
