//! Filenames mentioned in CMake build scripts

use super::ReferenceExtractor;
use crate::error::Result;
use crate::models::catalog::Reference;
use regex::Regex;
use std::path::Path;

/// Extensions recognised as file mentions inside a build script
pub const KNOWN_EXTENSIONS: &[&str] = &["c", "h", "sh", "py", "json", "md", "cmake"];

/// Picks up every `<name>.<known extension>` token on a line.
///
/// No directive syntax is required, so names inside comments and strings
/// count as references too.
#[derive(Debug, Clone)]
pub struct BuildScriptExtractor {
    pattern: Regex,
}

impl BuildScriptExtractor {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"\b([a-zA-Z0-9][a-zA-Z0-9_.-]*?\.(?:{}))\b",
            KNOWN_EXTENSIONS.join("|")
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }
}

impl ReferenceExtractor for BuildScriptExtractor {
    fn name(&self) -> &str {
        "build-script"
    }

    fn extract(&self, file: &Path, content: &str) -> Vec<Reference> {
        content
            .lines()
            .flat_map(|line| self.pattern.captures_iter(line))
            .map(|caps| Reference::new(&caps[1], file))
            .collect()
    }
}
