//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Exact name of the build-definition file
pub const BUILD_DEFINITION_FILE: &str = "CMakeLists.txt";

/// Default number of levels searched above and below the start directory
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Main configuration settings for an audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the root search starts from
    pub start_path: PathBuf,

    /// File extensions of interest, without the leading dot
    pub extensions: Vec<String>,

    /// Exact filenames of interest
    pub filenames: Vec<String>,

    /// Directory names pruned from traversal
    pub exclude_dirs: Vec<String>,

    /// Filenames marking a project root
    pub marker_files: Vec<String>,

    /// Levels searched up and down when locating the root
    pub max_depth: usize,

    /// Extension classes checked for duplicate basenames
    pub duplicate_classes: Vec<String>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to emit warnings for skipped files and directories
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_path: PathBuf::from("."),
            extensions: to_strings(&["c", "h", "json", "py", "cmake", "md", "sh"]),
            filenames: to_strings(&[BUILD_DEFINITION_FILE]),
            exclude_dirs: to_strings(&[".git", "build", "build_logs", "doc"]),
            marker_files: to_strings(&["LICENSE", "sdkconfig", "dependencies.lock", BUILD_DEFINITION_FILE]),
            max_depth: DEFAULT_SEARCH_DEPTH,
            duplicate_classes: to_strings(&["c", "h", "py", "sh"]),
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

impl Settings {
    /// Files of interest derived from these settings
    pub fn interest_spec(&self) -> InterestSpec {
        InterestSpec::new(&self.extensions, &self.filenames)
    }

    /// Directory names pruned from traversal
    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::new(&self.exclude_dirs)
    }

    /// Root marker filenames
    pub fn marker_set(&self) -> MarkerSet {
        MarkerSet::new(&self.marker_files)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Split a mixed list of extensions and filenames.
///
/// `*.c`, `.c` and `c` are extensions; an entry with an inner dot such as
/// `CMakeLists.txt` is an exact filename.
pub fn split_interest_entries(entries: &[String]) -> (Vec<String>, Vec<String>) {
    let mut extensions = Vec::new();
    let mut filenames = Vec::new();

    for entry in entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
        if let Some(ext) = entry.strip_prefix("*.").or_else(|| entry.strip_prefix('.')) {
            extensions.push(ext.to_string());
        } else if entry.contains('.') {
            filenames.push(entry.to_string());
        } else {
            extensions.push(entry.to_string());
        }
    }

    (extensions, filenames)
}

/// Which files are cataloged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestSpec {
    extensions: BTreeSet<String>,
    filenames: BTreeSet<String>,
}

impl InterestSpec {
    pub fn new(extensions: &[String], filenames: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            filenames: filenames.iter().cloned().collect(),
        }
    }

    /// Exact filename match or extension match
    pub fn matches(&self, path: &Path) -> bool {
        let name_match = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.filenames.contains(n));

        name_match
            || path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| self.extensions.contains(e))
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.filenames.iter().map(String::as_str)
    }
}

/// Directory names pruned from traversal, matched by name rather than path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.iter().cloned().collect(),
        }
    }

    /// Whether the final component of `path` is an excluded name
    pub fn excludes(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.names.contains(n))
    }

    /// Whether any component of `path` is an excluded name
    pub fn excludes_any_component(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|n| self.names.contains(n))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Filenames whose presence identifies a project root; any match qualifies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    names: Vec<String>,
}

impl MarkerSet {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }

    /// Whether `dir` directly contains a regular file named after any marker
    pub fn present_in(&self, dir: &Path) -> bool {
        self.names.iter().any(|marker| dir.join(marker).is_file())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned human-readable report
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// One CSV row per finding
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub start_path: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub filenames: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub marker_files: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub duplicate_classes: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.start_path.is_some() {
            self.start_path = other.start_path;
        }
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.filenames.is_some() {
            self.filenames = other.filenames;
        }
        if other.exclude_dirs.is_some() {
            self.exclude_dirs = other.exclude_dirs;
        }
        if other.marker_files.is_some() {
            self.marker_files = other.marker_files;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.duplicate_classes.is_some() {
            self.duplicate_classes = other.duplicate_classes;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(start_path) = &self.start_path {
            settings.start_path = start_path.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        if let Some(filenames) = &self.filenames {
            settings.filenames = filenames.clone();
        }
        if let Some(exclude_dirs) = &self.exclude_dirs {
            settings.exclude_dirs = exclude_dirs.clone();
        }
        if let Some(marker_files) = &self.marker_files {
            settings.marker_files = marker_files.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(duplicate_classes) = &self.duplicate_classes {
            settings.duplicate_classes = duplicate_classes.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
