//! Single-pass catalog and reference builder
//!
//! One top-down traversal from the project root inventories the files of
//! interest and collects every reference the registered extractors find.
//! Failures on individual files or directories are logged and skipped.

use crate::error::{AuditError, Result, ResultExt, handle_error};
use crate::models::catalog::{FileRecord, ScanOutcome};
use crate::models::config::{ExclusionSet, InterestSpec};
use crate::parsers::ExtractorRegistry;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks a project tree and builds its catalog
pub struct Walker {
    exclusions: ExclusionSet,
    interest: InterestSpec,
    registry: ExtractorRegistry,
}

impl Walker {
    /// Create a walker using the built-in extractors
    pub fn new(exclusions: ExclusionSet, interest: InterestSpec) -> Result<Self> {
        Ok(Self::with_registry(
            exclusions,
            interest,
            ExtractorRegistry::with_defaults()?,
        ))
    }

    /// Create a walker with a custom extractor registry
    pub fn with_registry(
        exclusions: ExclusionSet,
        interest: InterestSpec,
        registry: ExtractorRegistry,
    ) -> Self {
        Self {
            exclusions,
            interest,
            registry,
        }
    }

    /// Traverse `root` once and return everything found
    pub fn build(&self, root: &Path) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    handle_error(walk_error(&path, err));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() == 0 {
                    continue;
                }
                if self.exclusions.excludes(entry.path()) {
                    tracing::debug!("Skipping excluded directory: {}", entry.path().display());
                    outcome.excluded.push(entry.path().to_path_buf());
                    entries.skip_current_dir();
                    continue;
                }
                record_subfolder(&mut outcome, root, &entry);
                continue;
            }

            if entry.path_is_symlink() {
                tracing::warn!("Skipping symlink {}", entry.path().display());
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if relative
                .parent()
                .is_some_and(|dir| self.exclusions.excludes_any_component(dir))
            {
                continue;
            }

            self.process_file(&mut outcome, entry.path());
        }

        tracing::debug!(
            "Cataloged {} files with {} referenced names under {}",
            outcome.catalog.len(),
            outcome.references.len(),
            root.display()
        );
        outcome
    }

    fn process_file(&self, outcome: &mut ScanOutcome, path: &Path) {
        if self.interest.matches(path) {
            if let Some(record) = FileRecord::from_path(path) {
                outcome.catalog.insert(record);
            }
        }

        let Some(extractor) = self.registry.lookup(path) else {
            return;
        };

        match fs::read_to_string(path).with_file_context(path) {
            Ok(content) => {
                let references = extractor.extract(path, &content);
                tracing::debug!(
                    "{} extractor found {} references in {}",
                    extractor.name(),
                    references.len(),
                    path.display()
                );
                outcome.references.extend(references);
            }
            Err(err) => {
                handle_error(err);
            }
        }
    }
}

fn record_subfolder(outcome: &mut ScanOutcome, root: &Path, entry: &DirEntry) {
    if let Ok(relative) = entry.path().strip_prefix(root) {
        outcome.subfolders.insert(
            relative.to_string_lossy().into_owned(),
            entry.path().to_path_buf(),
        );
    }
}

fn walk_error(path: &Path, err: walkdir::Error) -> AuditError {
    match err.io_error().map(|e| e.kind()) {
        Some(std::io::ErrorKind::PermissionDenied) => AuditError::permission_denied(path),
        _ => AuditError::directory_traversal_error(path, err.to_string()),
    }
}
