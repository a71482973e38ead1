//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{AuditError, Result};
use crate::models::config::PartialSettings;

/// Embedded template written by `--init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AuditError::ConfigNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: crate::error::ErrorTrace::capture(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| AuditError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: crate::error::ErrorTrace::capture(),
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| AuditError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: crate::error::ErrorTrace::capture(),
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Reject values a config file can never mean
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(start_path) = &settings.start_path {
        if start_path.as_os_str().is_empty() {
            return Err(AuditError::config_error(format!(
                "Invalid empty start_path in config file: {}",
                path.display()
            )));
        }
    }

    let lists = [
        ("extensions", &settings.extensions),
        ("filenames", &settings.filenames),
        ("exclude_dirs", &settings.exclude_dirs),
        ("marker_files", &settings.marker_files),
        ("duplicate_classes", &settings.duplicate_classes),
    ];
    for (key, values) in lists {
        if let Some(values) = values {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(AuditError::config_error(format!(
                    "Empty entry in {} in config file: {}",
                    key,
                    path.display()
                )));
            }
        }
    }

    if settings.max_depth == Some(0) {
        return Err(AuditError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(AuditError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations.
///
/// Looks in the current directory, then the home directory, then
/// `<config dir>/projanitor/config.toml`. The first file found wins.
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for candidate in default_config_locations() {
        if candidate.is_file() {
            tracing::debug!("Using config file {}", candidate.display());
            return Ok(Some(parse_config_file(candidate)?));
        }
    }
    Ok(None)
}

fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("projanitor").join("config.toml"));
    }
    locations
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AuditError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| AuditError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: crate::error::ErrorTrace::capture(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let config_content = r#"
            start_path = "/firmware/app"
            extensions = ["c", "h"]
            exclude_dirs = ["build", "managed_components"]
            max_depth = 5
            output_format = "json"
        "#;

        fs::write(&config_path, config_content).unwrap();

        let settings = parse_config_file(&config_path).unwrap();

        assert_eq!(settings.start_path, Some(PathBuf::from("/firmware/app")));
        assert_eq!(
            settings.exclude_dirs,
            Some(vec!["build".to_string(), "managed_components".to_string()])
        );
        assert_eq!(settings.max_depth, Some(5));
        assert_eq!(settings.verbose, None);
    }

    #[test]
    fn test_parse_config_content_rejects_unknown_keys() {
        let result = parse_config_content("scan_path = \"/x\"\n", "virtual.toml");
        assert!(matches!(result, Err(AuditError::ConfigParse { .. })));
    }

    #[test]
    fn test_validate_partial_settings() {
        let valid = PartialSettings {
            start_path: Some(PathBuf::from("/test/path")),
            exclude_dirs: Some(vec!["build".to_string()]),
            max_depth: Some(2),
            ..Default::default()
        };
        assert!(validate_partial_settings(&valid, "test.toml").is_ok());

        let zero_depth = PartialSettings {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(validate_partial_settings(&zero_depth, "test.toml").is_err());

        let empty_marker = PartialSettings {
            marker_files: Some(vec!["LICENSE".to_string(), " ".to_string()]),
            ..Default::default()
        };
        assert!(validate_partial_settings(&empty_marker, "test.toml").is_err());
    }

    #[test]
    fn test_create_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        create_default_config(&config_path).unwrap();
        assert!(config_path.exists());

        // The template documents the defaults without overriding anything
        let settings = parse_config_file(&config_path).unwrap();
        assert_eq!(settings, PartialSettings::default());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let result = parse_config_file(temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(AuditError::ConfigNotFound { .. })));
    }
}
