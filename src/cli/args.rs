//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// projanitor - project structure auditor for CMake-based C projects
#[derive(Parser, Debug)]
#[command(name = "projanitor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit a CMake-based C project for orphaned, missing and duplicate files")]
#[command(long_about = "projanitor locates the root of a CMake-based C/C++ project, catalogs its source, \
header, script and build files, and cross-references them against the includes, build-script mentions \
and Python imports found in the tree. It reports files nothing references, references to files that do \
not exist, and basenames that occur more than once.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Audit the project containing the current directory
    projanitor

    # Start the root search somewhere else
    projanitor --path ./firmware/main

    # Search up to five levels up and down for the project root
    projanitor --max-depth 5

Selecting Files:
    # Only catalog C sources and headers plus the build definition
    projanitor --extensions c,h,CMakeLists.txt

    # Skip additional directories
    projanitor --exclude-dirs .git,build,managed_components

    # Treat a different file as the project root marker
    projanitor --marker-files sdkconfig

    # Check only .c and .h files for duplicate basenames
    projanitor --track c,h

Output Options:
    # Machine-readable output
    projanitor --output json
    projanitor --output csv --output-file audit.csv

    # Plain text without colors
    projanitor --no-colors

Configuration:
    # Use a specific configuration file
    projanitor --config ./projanitor.toml

    # Create a default configuration file (.projanitor.toml)
    projanitor --init

Verbosity:
    # Log skipped files, unresolved includes and other warnings to stderr
    projanitor --verbose
")]
pub struct Args {
    /// Directory the root search starts from
    #[arg(short, long, value_name = "PATH", help = "Directory to start the project root search from (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Extensions and filenames of interest
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', help = "Comma-separated extensions (c, .c or *.c) and exact filenames (CMakeLists.txt) to catalog")]
    pub extensions: Vec<String>,

    /// Exact filenames of interest
    #[arg(long, value_name = "LIST", value_delimiter = ',', help = "Comma-separated exact filenames to catalog in addition to the extensions")]
    pub filenames: Vec<String>,

    /// Directory names to skip
    #[arg(short = 'x', long, value_name = "LIST", value_delimiter = ',', help = "Comma-separated directory names never entered (default: .git,build,build_logs,doc)")]
    pub exclude_dirs: Vec<String>,

    /// Root marker filenames
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', help = "Comma-separated filenames whose presence marks a project root")]
    pub marker_files: Vec<String>,

    /// Levels searched up and down for the project root
    #[arg(long, value_name = "DEPTH", help = "Number of directory levels searched above and below the start directory (default: 3)")]
    pub max_depth: Option<usize>,

    /// Extension classes checked for duplicates
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', help = "Comma-separated extensions checked for duplicate basenames (default: c,h,py,sh)")]
    pub track: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Report format: 'text' for the sectioned report, 'json' for machine processing, 'csv' for one row per finding")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping the report)")]
    pub no_colors: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only print the report)")]
    pub quiet: bool,

    /// Log recoverable problems
    #[arg(short, long, help = "Log skipped files, unreadable directories and unresolved includes to stderr")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .projanitor.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.projanitor.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned text report
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per finding
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
