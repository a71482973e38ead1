//! Validation of fully merged settings

use std::path::Path;

use crate::error::{AuditError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.start_path.exists() {
            return Err(AuditError::invalid_path(&settings.start_path));
        }

        if settings.max_depth == 0 {
            return Err(AuditError::config_error("Max depth must be at least 1"));
        }

        if settings.marker_files.is_empty() {
            return Err(AuditError::config_error("At least one marker file is required"));
        }

        if settings.extensions.is_empty() && settings.filenames.is_empty() {
            return Err(AuditError::config_error(
                "At least one extension or filename of interest is required",
            ));
        }

        let lists = [
            ("extension", &settings.extensions),
            ("filename", &settings.filenames),
            ("excluded directory", &settings.exclude_dirs),
            ("marker file", &settings.marker_files),
            ("duplicate class", &settings.duplicate_classes),
        ];
        for (label, values) in lists {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(AuditError::config_error(format!("Empty {} entry", label)));
            }
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(AuditError::invalid_path(parent))
            }
            _ => Ok(()),
        }
    }
}
