//! Project name from the root build definition

use crate::error::{Result, ResultExt};
use crate::models::config::BUILD_DEFINITION_FILE;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Name reported when no `project(...)` declaration can be read
pub const UNKNOWN_PROJECT: &str = "Unknown";

/// Parser for the `project(<name> ...)` declaration.
///
/// Accepts trailing arguments such as `VERSION` or `LANGUAGES`, so
/// `project(Foo VERSION 1.0)` yields `Foo`.
#[derive(Debug, Clone)]
pub struct ProjectNameParser {
    pattern: Regex,
}

impl ProjectNameParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?i)\bproject\s*\(\s*(\w+)")?,
        })
    }

    /// First `project(<name>` declaration in `content`, case-insensitive
    pub fn parse(&self, content: &str) -> Option<String> {
        content
            .lines()
            .find_map(|line| self.pattern.captures(line).map(|caps| caps[1].to_string()))
    }

    /// Read `<root>/CMakeLists.txt` and return the declared project name
    pub fn parse_root(&self, root: &Path) -> Result<Option<String>> {
        let path = root.join(BUILD_DEFINITION_FILE);
        let content = fs::read_to_string(&path).with_file_context(&path)?;
        Ok(self.parse(&content))
    }

    /// Best-effort project name, falling back to [`UNKNOWN_PROJECT`]
    pub fn project_name(&self, root: &Path) -> String {
        match self.parse_root(root) {
            Ok(Some(name)) => name,
            Ok(None) => {
                tracing::warn!(
                    "Could not parse project name from {}",
                    root.join(BUILD_DEFINITION_FILE).display()
                );
                UNKNOWN_PROJECT.to_string()
            }
            Err(err) => {
                tracing::warn!("{}", err.user_message());
                UNKNOWN_PROJECT.to_string()
            }
        }
    }
}
