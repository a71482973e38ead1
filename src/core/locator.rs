//! Project root discovery
//!
//! The search runs in two phases over a fixed list of candidate directories:
//! first the start directory and its ancestors are checked nearest-first, then
//! each of them is searched breadth-first downward. Both phases are bounded by
//! the same depth and share one set of visited canonical paths.

use crate::error::{AuditError, OptionExt, Result, ResultExt, handle_error};
use crate::models::config::{ExclusionSet, MarkerSet, DEFAULT_SEARCH_DEPTH};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Finds the single directory a scan is rooted at
#[derive(Debug, Clone)]
pub struct RootLocator {
    markers: MarkerSet,
    max_depth: usize,
    exclusions: ExclusionSet,
}

impl RootLocator {
    /// Create a locator searching `max_depth` levels up and down
    pub fn new(markers: MarkerSet, max_depth: usize) -> Self {
        Self {
            markers,
            max_depth,
            exclusions: ExclusionSet::default(),
        }
    }

    /// Never check or descend into directories with these names
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Locate the project root for `start`
    pub fn locate(&self, start: &Path) -> Result<PathBuf> {
        let start = fs::canonicalize(start).map_err(|_| AuditError::invalid_path(start))?;
        let mut visited = HashSet::new();
        let ancestors = self.ancestor_chain(&start, &mut visited);

        self.search_upward(&ancestors)
            .or_else(|| self.search_downward(&ancestors, &mut visited))
            .map(|root| {
                tracing::info!("Project root found at: {}", root.display());
                root
            })
            .ok_or_error(|| AuditError::root_not_found(&start, self.markers.names()))
    }

    /// The start directory followed by up to `max_depth` parents, nearest
    /// first, without duplicates
    fn ancestor_chain(&self, start: &Path, visited: &mut HashSet<PathBuf>) -> Vec<PathBuf> {
        start
            .ancestors()
            .take(self.max_depth + 1)
            .filter(|dir| visited.insert(dir.to_path_buf()))
            .filter(|dir| !self.exclusions.excludes(dir))
            .map(Path::to_path_buf)
            .collect()
    }

    fn search_upward(&self, ancestors: &[PathBuf]) -> Option<PathBuf> {
        ancestors
            .iter()
            .find(|dir| self.markers.present_in(dir))
            .cloned()
    }

    fn search_downward(
        &self,
        ancestors: &[PathBuf],
        visited: &mut HashSet<PathBuf>,
    ) -> Option<PathBuf> {
        for origin in ancestors {
            let mut level = vec![origin.clone()];
            let mut depth = 0;

            while !level.is_empty() && depth < self.max_depth {
                let mut next_level = Vec::new();

                for folder in &level {
                    for sub in self.child_directories(folder) {
                        if !visited.insert(sub.clone()) {
                            continue;
                        }
                        if self.markers.present_in(&sub) {
                            return Some(sub);
                        }
                        next_level.push(sub);
                    }
                }

                level = next_level;
                depth += 1;
            }
        }

        None
    }

    /// Non-symlink, non-excluded subdirectories of `folder`, sorted by name.
    /// Unreadable directories yield nothing.
    fn child_directories(&self, folder: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(folder).with_file_context(folder) {
            Ok(entries) => entries,
            Err(err) => {
                handle_error(err);
                return Vec::new();
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| match entry.with_file_context(folder) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    handle_error(err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .map(|entry| entry.path())
            .filter(|path| !self.exclusions.excludes(path))
            .collect();

        children.sort();
        children
    }
}

impl Default for RootLocator {
    fn default() -> Self {
        Self::new(MarkerSet::default(), DEFAULT_SEARCH_DEPTH)
    }
}
