//! Quoted `#include` directives in C/C++ sources

use super::ReferenceExtractor;
use crate::error::Result;
use crate::models::catalog::Reference;
use crate::utils::path_resolver::canonical_basename;
use regex::Regex;
use std::path::Path;

/// Extracts `#include "..."` targets.
///
/// A target is resolved against the including file's directory and
/// canonicalized. Targets that cannot be resolved are dropped, so an include
/// of a header that exists nowhere is never reported as missing.
#[derive(Debug, Clone)]
pub struct IncludeExtractor {
    pattern: Regex,
}

impl IncludeExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r#"#\s*include\s*"([^"]+)""#)?,
        })
    }
}

impl ReferenceExtractor for IncludeExtractor {
    fn name(&self) -> &str {
        "include"
    }

    fn extract(&self, file: &Path, content: &str) -> Vec<Reference> {
        let mut references = Vec::new();

        for line in content.lines() {
            for caps in self.pattern.captures_iter(line) {
                let target = &caps[1];
                match canonical_basename(target, file) {
                    Some(basename) => references.push(Reference::new(basename, file)),
                    None => tracing::warn!(
                        "Reference {} in {} not found",
                        target,
                        file.display()
                    ),
                }
            }
        }

        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolves_includes_relative_to_file() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(src.join("drivers")).unwrap();
        fs::write(src.join("app.h"), "").unwrap();
        fs::write(src.join("drivers").join("uart.h"), "").unwrap();
        let file = src.join("main.c");

        let content = "#include \"app.h\"\n#  include \"drivers/uart.h\"\n#include <stdio.h>\n";
        let extractor = IncludeExtractor::new().unwrap();
        let refs = extractor.extract(&file, content);

        let names: Vec<_> = refs.iter().map(|r| r.basename.as_str()).collect();
        assert_eq!(names, vec!["app.h", "uart.h"]);
        assert!(refs.iter().all(|r| r.source == file));
    }

    #[test]
    fn test_unresolvable_include_is_dropped() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("main.c");

        let extractor = IncludeExtractor::new().unwrap();
        let refs = extractor.extract(&file, "#include \"foo.h\"\n");

        assert!(refs.is_empty());
    }

    #[test]
    fn test_parent_directory_include() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::create_dir_all(temp_dir.path().join("include")).unwrap();
        fs::write(temp_dir.path().join("include").join("config.h"), "").unwrap();
        let file = temp_dir.path().join("src").join("main.c");

        let extractor = IncludeExtractor::new().unwrap();
        let refs = extractor.extract(&file, "#include \"../include/config.h\" // board config\n");

        assert_eq!(refs, vec![Reference::new("config.h", &file)]);
    }
}
