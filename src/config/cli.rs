//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings, split_interest_entries};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line values that take part in configuration layering
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub filenames: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub marker_files: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub track: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl CliConfig {
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            extensions: non_empty(&args.extensions),
            filenames: non_empty(&args.filenames),
            exclude_dirs: non_empty(&args.exclude_dirs),
            marker_files: non_empty(&args.marker_files),
            max_depth: args.max_depth,
            track: non_empty(&args.track),
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.start_path = Some(path.clone());
        }

        // `--extensions` replaces the whole interest list, including the
        // exact filenames it names such as CMakeLists.txt
        let mut filenames = self.args.filenames.clone();
        if let Some(entries) = &self.args.extensions {
            let (extensions, named) = split_interest_entries(entries);
            settings.extensions = Some(extensions);
            filenames.get_or_insert_with(Vec::new).extend(named);
        }
        settings.filenames = filenames;

        settings.exclude_dirs = self.args.exclude_dirs.clone();
        settings.marker_files = self.args.marker_files.clone();
        settings.max_depth = self.args.max_depth;
        settings.duplicate_classes = self.args.track.clone();
        settings.output_format = self.args.output_format;
        settings.output_file = self.args.output_file.clone();

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
