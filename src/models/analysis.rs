//! Analysis result structures

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Basenames sharing one extension class that occur more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// Extension class, without the leading dot
    pub extension: String,
    pub entries: Vec<DuplicateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub basename: String,
    /// Sorted; the first path is the primary one only by sort order
    pub paths: Vec<PathBuf>,
}

impl DuplicateEntry {
    pub fn primary(&self) -> Option<&PathBuf> {
        self.paths.first()
    }
}

/// A cataloged basename nothing references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orphan {
    pub basename: String,
    pub paths: Vec<PathBuf>,
}

/// A referenced basename absent from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReference {
    pub basename: String,
    pub referenced_by: Vec<PathBuf>,
}

/// Classification of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub duplicates: Vec<DuplicateGroup>,
    pub orphans: Vec<Orphan>,
    pub missing: Vec<MissingReference>,
}

impl Findings {
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.iter().map(|g| g.entries.len()).sum()
    }

    /// Whether the scan found nothing to report
    pub fn is_clean(&self) -> bool {
        self.duplicate_count() == 0 && self.orphans.is_empty() && self.missing.is_empty()
    }
}

/// File counts for the statistics section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_files: usize,
    /// Extension (without dot) to number of cataloged files
    pub per_extension: BTreeMap<String, usize>,
    pub build_definition_files: usize,
}

/// Complete result of one audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub project_name: String,
    pub root: PathBuf,
    pub subfolders: BTreeMap<String, PathBuf>,
    /// Sorted
    pub excluded: Vec<PathBuf>,
    pub statistics: Statistics,
    pub findings: Findings,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
