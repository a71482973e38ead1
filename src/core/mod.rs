//! Core functionality for root discovery, scanning and analysis

pub mod analyzer;
pub mod auditor;
pub mod locator;
pub mod walker;

pub use analyzer::Analyzer;
pub use auditor::Auditor;
pub use locator::RootLocator;
pub use walker::Walker;
