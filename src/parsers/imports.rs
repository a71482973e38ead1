//! `from x.y import z` statements in Python modules

use super::ReferenceExtractor;
use crate::error::Result;
use crate::models::catalog::Reference;
use regex::Regex;
use std::path::Path;

/// Maps `from pkg.helpers import thing` to `helpers.py`.
///
/// Package structure is not resolved; only the last dotted segment is kept.
#[derive(Debug, Clone)]
pub struct ImportExtractor {
    pattern: Regex,
}

impl ImportExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"\bfrom\s+([a-zA-Z0-9_.-]+)\s+import\b")?,
        })
    }

    fn module_basename(dotted: &str) -> Option<String> {
        let last = dotted.rsplit('.').next()?;
        if last.is_empty() {
            // `from . import x` names no module
            return None;
        }
        Some(format!("{}.py", last))
    }
}

impl ReferenceExtractor for ImportExtractor {
    fn name(&self) -> &str {
        "import"
    }

    fn extract(&self, file: &Path, content: &str) -> Vec<Reference> {
        content
            .lines()
            .flat_map(|line| self.pattern.captures_iter(line))
            .filter_map(|caps| Self::module_basename(&caps[1]))
            .map(|basename| Reference::new(basename, file))
            .collect()
    }
}
