//! Reference extraction for each kind of source file
//!
//! Every extractor scans file content line by line with a pattern and yields
//! the basenames it finds. Matching is heuristic: nothing here parses a real
//! grammar. The [`ExtractorRegistry`] maps a [`FileKind`] to the extractor
//! used for it, so the walker never needs to know which kinds exist.

pub mod build_script;
pub mod imports;
pub mod includes;
pub mod project;

pub use build_script::BuildScriptExtractor;
pub use imports::ImportExtractor;
pub use includes::IncludeExtractor;
pub use project::ProjectNameParser;

use crate::error::Result;
use crate::models::catalog::Reference;
use std::collections::HashMap;
use std::path::Path;

/// Extensions handled as C/C++ sources and headers
const C_FAMILY_EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "cxx", "hh", "hpp", "hxx"];

/// Kinds of file that carry references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// C/C++ source or header
    CSource,
    /// `CMakeLists.txt` or a `.cmake` module
    BuildScript,
    /// Python module
    PythonSource,
}

impl FileKind {
    /// Classify a path, checking C sources first, then build scripts, then
    /// Python modules
    pub fn detect(path: &Path) -> Option<FileKind> {
        let extension = path.extension().and_then(|e| e.to_str());
        if extension.is_some_and(|e| C_FAMILY_EXTENSIONS.contains(&e)) {
            return Some(FileKind::CSource);
        }

        let name = path.file_name()?.to_str()?.to_lowercase();
        if name.ends_with(".cmake") || name.ends_with("cmakelists.txt") {
            return Some(FileKind::BuildScript);
        }

        if extension == Some("py") {
            return Some(FileKind::PythonSource);
        }

        None
    }
}

/// A strategy turning file content into references
pub trait ReferenceExtractor {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// References found in `content`, read from `file`
    fn extract(&self, file: &Path, content: &str) -> Vec<Reference>;
}

/// Strategy table from file kind to extractor
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<FileKind, Box<dyn ReferenceExtractor>>,
}

impl ExtractorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The three built-in strategies
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(FileKind::CSource, Box::new(IncludeExtractor::new()?));
        registry.register(FileKind::BuildScript, Box::new(BuildScriptExtractor::new()?));
        registry.register(FileKind::PythonSource, Box::new(ImportExtractor::new()?));
        Ok(registry)
    }

    /// Install `extractor` for `kind`, replacing any previous one
    pub fn register(&mut self, kind: FileKind, extractor: Box<dyn ReferenceExtractor>) {
        self.extractors.insert(kind, extractor);
    }

    pub fn get(&self, kind: FileKind) -> Option<&dyn ReferenceExtractor> {
        self.extractors.get(&kind).map(|e| e.as_ref())
    }

    /// The extractor responsible for `path`, if any
    pub fn lookup(&self, path: &Path) -> Option<&dyn ReferenceExtractor> {
        FileKind::detect(path).and_then(|kind| self.get(kind))
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self
            .extractors
            .iter()
            .map(|(kind, extractor)| (format!("{:?}", kind), extractor.name().to_string()))
            .collect();
        kinds.sort();
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &kinds)
            .finish()
    }
}
