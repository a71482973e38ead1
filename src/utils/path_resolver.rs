//! Reference path resolution
//!
//! An unresolvable reference is an ordinary outcome here, so resolution hands
//! back `Option` instead of an error.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `specifier` relative to the directory containing `from` and
/// canonicalize it. `None` when the target does not exist or cannot be
/// resolved.
pub fn resolve_relative(specifier: &str, from: &Path) -> Option<PathBuf> {
    let base = from.parent().unwrap_or(from);
    fs::canonicalize(base.join(specifier)).ok()
}

/// Final component of the canonical target of `specifier`
pub fn canonical_basename(specifier: &str, from: &Path) -> Option<String> {
    let resolved = resolve_relative(specifier, from)?;
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
}
