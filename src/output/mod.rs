//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};

use crate::error::Result;
use crate::models::analysis::AuditReport;
use crate::models::config::OutputFormat;

/// Trait for different output formatters
pub trait Formatter {
    /// Render an audit report
    fn format(&self, report: &AuditReport) -> Result<String>;
}

/// Text formatter for the human-readable report
pub struct TextFormatter {
    pub use_colors: bool,
    pub quiet: bool,
}

impl TextFormatter {
    pub fn new(use_colors: bool, quiet: bool) -> Self {
        Self { use_colors, quiet }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        if self.quiet {
            return Ok(formatters::format_report_brief(report, self.use_colors));
        }
        Ok(formatters::format_report_text(report, self.use_colors))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// CSV formatter, one row per finding
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
