//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use super::{ConfigSource, parser};
use crate::error::{AuditError, Result};
use crate::models::config::{PartialSettings, split_interest_entries};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".projanitor.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a file source for `.projanitor.toml` in the current directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(AuditError::ConfigNotFound {
                path: self.path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: crate::error::ErrorTrace::capture(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Variables read by [`EnvConfig`], without the prefix
const ENV_KEYS: &[&str] = &[
    "START_PATH",
    "EXTENSIONS",
    "EXCLUDE_DIRS",
    "MARKER_FILES",
    "MAX_DEPTH",
    "OUTPUT_FORMAT",
    "VERBOSE",
];

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("START_PATH") {
            settings.start_path = Some(PathBuf::from(path));
        }

        if let Some(entries) = self.list("EXTENSIONS") {
            let (extensions, filenames) = split_interest_entries(&entries);
            settings.extensions = Some(extensions);
            settings.filenames = Some(filenames);
        }

        settings.exclude_dirs = self.list("EXCLUDE_DIRS");
        settings.marker_files = self.list("MARKER_FILES");

        if let Some(max_depth) = self.var("MAX_DEPTH") {
            match max_depth.trim().parse() {
                Ok(depth) => settings.max_depth = Some(depth),
                Err(_) => tracing::warn!("Ignoring {}_MAX_DEPTH={}", self.prefix, max_depth),
            }
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            match format.parse() {
                Ok(output_format) => settings.output_format = Some(output_format),
                Err(err) => tracing::warn!("Ignoring {}_OUTPUT_FORMAT: {}", self.prefix, err),
            }
        }

        if let Some(verbose) = self.var("VERBOSE") {
            settings.verbose = Some(matches!(
                verbose.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
