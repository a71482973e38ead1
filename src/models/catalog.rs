//! Inventory and reference structures built by a single traversal

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// A cataloged file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub basename: String,
    pub extension: Option<String>,
}

impl FileRecord {
    /// Build a record from a path; `None` when the path has no file name.
    ///
    /// Names that are not valid UTF-8 are kept in lossy form.
    pub fn from_path(path: &Path) -> Option<Self> {
        let basename = path.file_name()?.to_string_lossy().into_owned();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        Some(Self {
            path: path.to_path_buf(),
            basename,
            extension,
        })
    }
}

/// Files of interest keyed by basename.
///
/// Records under one basename keep traversal order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    by_basename: BTreeMap<String, Vec<FileRecord>>,
    total: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: FileRecord) {
        self.by_basename
            .entry(record.basename.clone())
            .or_default()
            .push(record);
        self.total += 1;
    }

    /// Total number of records, duplicates included
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn contains(&self, basename: &str) -> bool {
        self.by_basename.contains_key(basename)
    }

    pub fn records(&self, basename: &str) -> &[FileRecord] {
        self.by_basename
            .get(basename)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Existing basenames, sorted
    pub fn basenames(&self) -> BTreeSet<&str> {
        self.by_basename.keys().map(String::as_str).collect()
    }

    /// Every (basename, records) group, sorted by basename
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[FileRecord])> {
        self.by_basename
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Every record
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.by_basename.values().flatten()
    }
}

/// A single reference found by an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub basename: String,
    pub source: PathBuf,
}

impl Reference {
    pub fn new(basename: impl Into<String>, source: &Path) -> Self {
        Self {
            basename: basename.into(),
            source: source.to_path_buf(),
        }
    }
}

/// Referenced basename to the set of files referencing it
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceEdges {
    edges: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl ReferenceEdges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, reference: Reference) {
        self.edges
            .entry(reference.basename)
            .or_default()
            .insert(reference.source);
    }

    pub fn extend(&mut self, references: impl IntoIterator<Item = Reference>) {
        for reference in references {
            self.add(reference);
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, basename: &str) -> bool {
        self.edges.contains_key(basename)
    }

    /// Referenced basenames, sorted
    pub fn basenames(&self) -> BTreeSet<&str> {
        self.edges.keys().map(String::as_str).collect()
    }

    /// Files referencing `basename`, sorted
    pub fn referrers(&self, basename: &str) -> Vec<PathBuf> {
        self.edges
            .get(basename)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Everything a traversal produces
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub catalog: Catalog,
    pub references: ReferenceEdges,
    /// Absolute paths of pruned directories, in traversal order
    pub excluded: Vec<PathBuf>,
    /// Relative path to absolute path of every non-root directory visited
    pub subfolders: BTreeMap<String, PathBuf>,
}
