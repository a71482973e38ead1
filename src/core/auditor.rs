//! End-to-end audit: locate, scan, analyze

use crate::core::{Analyzer, RootLocator, Walker};
use crate::error::Result;
use crate::models::analysis::AuditReport;
use crate::models::config::Settings;
use crate::parsers::project::ProjectNameParser;

/// Runs one audit for a fixed set of settings
pub struct Auditor {
    settings: Settings,
}

impl Auditor {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Locate the project root and audit it.
    ///
    /// Fails only when no root can be found or the start path is invalid;
    /// problems with individual files are logged and skipped.
    pub fn run(&self) -> Result<AuditReport> {
        let exclusions = self.settings.exclusion_set();
        let interest = self.settings.interest_spec();

        let root = RootLocator::new(self.settings.marker_set(), self.settings.max_depth)
            .with_exclusions(exclusions.clone())
            .locate(&self.settings.start_path)?;

        let project_name = ProjectNameParser::new()?.project_name(&root);
        let walker = Walker::new(exclusions, interest.clone())?;
        let mut outcome = walker.build(&root);
        outcome.excluded.sort();

        let findings =
            Analyzer::new(&self.settings.duplicate_classes).analyze(&outcome.catalog, &outcome.references);
        let statistics = Analyzer::statistics(&outcome.catalog, &interest);

        Ok(AuditReport {
            project_name,
            root,
            subfolders: outcome.subfolders,
            excluded: outcome.excluded,
            statistics,
            findings,
            generated_at: chrono::Utc::now(),
        })
    }
}
