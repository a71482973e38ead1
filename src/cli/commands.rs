//! Command implementations

use super::Args;
use crate::config::{CliArgs, file::DEFAULT_CONFIG_FILE, load_config, parser};
use crate::core::Auditor;
use crate::error::Result;
use crate::models::analysis::AuditReport;
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer};
use std::path::Path;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Audit the project found from the configured start path
    Audit(Box<Settings>),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments, resolving all configuration
    /// layers for an audit
    pub fn from_args(args: Args) -> Result<Self> {
        if args.init {
            return Ok(Command::Init);
        }

        let settings = load_config(CliArgs::from(&args))?;
        Ok(Command::Audit(Box::new(settings)))
    }

    /// Settings of an audit command
    pub fn settings(&self) -> Option<&Settings> {
        match self {
            Command::Audit(settings) => Some(&**settings),
            Command::Init => None,
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Audit(settings) => run_audit(settings),
            Command::Init => init_config(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Run the command and map any failure to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => report_failure(&err),
        }
    }
}

/// Print a failure to stderr and return its exit code
pub fn report_failure(err: &crate::error::AuditError) -> i32 {
    eprintln!("{}: {}", err.severity(), err.user_message());
    err.exit_code()
}

/// Audit the project and write the report.
///
/// Findings never fail the run; only a missing root or an unwritable
/// destination does.
pub fn run_audit(settings: &Settings) -> Result<()> {
    let report = Auditor::new(settings.clone()).run()?;
    if let Some(notice) = empty_catalog_notice(&report) {
        eprintln!("{}", notice);
    }

    // Colors only make sense on a terminal stream
    let use_colors = settings.use_colors && settings.output_file.is_none();
    let formatter = create_formatter(settings.output_format, use_colors, settings.quiet);
    let output = formatter.format(&report)?;

    create_writer(settings.output_file.as_ref()).write(&output)?;

    if let Some(path) = &settings.output_file {
        if !settings.quiet {
            println!("Report written to: {}", path.display());
        }
    }

    Ok(())
}

/// Notice for a run that cataloged nothing; shown even without `--verbose`
fn empty_catalog_notice(report: &AuditReport) -> Option<String> {
    (report.statistics.total_files == 0).then(|| {
        format!(
            "WARNING: No files of interest found in project {}",
            report.root.display()
        )
    })
}

/// Write the default configuration file unless one already exists
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    parser::create_default_config(path)?;

    println!("Created default configuration file at: {}", path.display());
    println!("\nEvery setting is commented out; uncomment a line to override its default.");
    println!("Environment variables (PROJANITOR_*) and command-line flags still take precedence.");
    Ok(())
}
