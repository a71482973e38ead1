//! Consistency analysis over a finished catalog

use crate::models::analysis::{
    DuplicateEntry, DuplicateGroup, Findings, MissingReference, Orphan, Statistics,
};
use crate::models::catalog::{Catalog, ReferenceEdges};
use crate::models::config::{InterestSpec, BUILD_DEFINITION_FILE};

/// Classifies cataloged files against the references found during the scan
#[derive(Debug, Clone)]
pub struct Analyzer {
    duplicate_classes: Vec<String>,
}

impl Analyzer {
    /// Create an analyzer checking the given extension classes for duplicates
    pub fn new(duplicate_classes: &[String]) -> Self {
        Self {
            duplicate_classes: duplicate_classes
                .iter()
                .map(|class| class.trim_start_matches('.').to_ascii_lowercase())
                .filter(|class| !class.is_empty())
                .collect(),
        }
    }

    /// Compute duplicates, orphans and missing references
    pub fn analyze(&self, catalog: &Catalog, references: &ReferenceEdges) -> Findings {
        let findings = Findings {
            duplicates: self.duplicates(catalog),
            orphans: Self::orphans(catalog, references),
            missing: Self::missing(catalog, references),
        };

        tracing::debug!(
            "Analysis found {} duplicates, {} orphans, {} missing references",
            findings.duplicate_count(),
            findings.orphans.len(),
            findings.missing.len()
        );
        findings
    }

    /// One group per tracked class, in configured order
    fn duplicates(&self, catalog: &Catalog) -> Vec<DuplicateGroup> {
        self.duplicate_classes
            .iter()
            .map(|class| {
                let suffix = format!(".{}", class);
                let entries = catalog
                    .groups()
                    .filter(|(basename, records)| {
                        records.len() > 1 && basename.to_ascii_lowercase().ends_with(&suffix)
                    })
                    .map(|(basename, records)| {
                        let mut paths: Vec<_> = records.iter().map(|r| r.path.clone()).collect();
                        paths.sort();
                        DuplicateEntry {
                            basename: basename.to_string(),
                            paths,
                        }
                    })
                    .collect();

                DuplicateGroup {
                    extension: class.clone(),
                    entries,
                }
            })
            .collect()
    }

    fn orphans(catalog: &Catalog, references: &ReferenceEdges) -> Vec<Orphan> {
        catalog
            .basenames()
            .difference(&references.basenames())
            .map(|basename| {
                let mut paths: Vec<_> = catalog
                    .records(basename)
                    .iter()
                    .map(|r| r.path.clone())
                    .collect();
                paths.sort();
                Orphan {
                    basename: basename.to_string(),
                    paths,
                }
            })
            .collect()
    }

    fn missing(catalog: &Catalog, references: &ReferenceEdges) -> Vec<MissingReference> {
        references
            .basenames()
            .difference(&catalog.basenames())
            .map(|basename| MissingReference {
                basename: basename.to_string(),
                referenced_by: references.referrers(basename),
            })
            .collect()
    }

    /// File counts for every configured extension
    pub fn statistics(catalog: &Catalog, interest: &InterestSpec) -> Statistics {
        let lowered: Vec<String> = catalog
            .iter()
            .map(|record| record.basename.to_ascii_lowercase())
            .collect();

        let per_extension = interest
            .extensions()
            .map(|ext| {
                let suffix = format!(".{}", ext.to_ascii_lowercase());
                let count = lowered.iter().filter(|name| name.ends_with(&suffix)).count();
                (ext.to_string(), count)
            })
            .collect();

        let build_definition_files = catalog
            .iter()
            .filter(|record| record.basename.eq_ignore_ascii_case(BUILD_DEFINITION_FILE))
            .count();

        Statistics {
            total_files: catalog.len(),
            per_extension,
            build_definition_files,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&["c", "h", "py", "sh"].map(String::from))
    }
}
