//! Output formatting utilities
//!
//! Text, JSON and CSV renderings of an [`AuditReport`].

use crate::error::{AuditError, Result};
use crate::models::analysis::AuditReport;
use crate::models::config::BUILD_DEFINITION_FILE;
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt::Write as _;
use std::path::Path;

const NONE: &str = "  (None)";

fn heading(title: &str, use_colors: bool) -> String {
    let title = format!("=== {} ===", title);
    if use_colors {
        Blue.bold().paint(title).to_string()
    } else {
        title
    }
}

fn count(label: &str, value: usize, colour_if_nonzero: ansi_term::Colour, use_colors: bool) -> String {
    let line = format!("{}: {}", label, value);
    if use_colors && value > 0 {
        colour_if_nonzero.bold().paint(line).to_string()
    } else {
        line
    }
}

fn none_line(use_colors: bool) -> String {
    if use_colors {
        Style::new().dimmed().paint(NONE).to_string()
    } else {
        NONE.to_string()
    }
}

/// Format the full sectioned report.
///
/// Sections always appear in the same order: Summary, Statistics, Warnings,
/// Errors.
pub fn format_report_text(report: &AuditReport, use_colors: bool) -> String {
    let mut out = String::new();

    // Summary
    let _ = writeln!(out, "{}", heading("Summary", use_colors));
    let _ = writeln!(out, "Project name: {}", report.project_name);
    let _ = writeln!(out, "Project root folder: {}", report.root.display());
    let _ = writeln!(out, "Key subfolders:");
    if report.subfolders.is_empty() {
        let _ = writeln!(out, "{}", none_line(use_colors));
    }
    for (relative, path) in &report.subfolders {
        let _ = writeln!(out, "  - {}: {}", relative, path.display());
    }
    let _ = writeln!(out, "Excluded directories:");
    if report.excluded.is_empty() {
        let _ = writeln!(out, "{}", none_line(use_colors));
    }
    for area in &report.excluded {
        let _ = writeln!(out, "  - {}", area.display());
    }

    // Statistics
    let stats = &report.statistics;
    let _ = writeln!(out, "\n{}", heading("Statistics", use_colors));
    let _ = writeln!(out, "Total # of files of interest: {}", stats.total_files);
    for (ext, n) in &stats.per_extension {
        let _ = writeln!(out, "# of .{}: {}", ext, n);
    }
    let _ = writeln!(out, "# of {}: {}", BUILD_DEFINITION_FILE, stats.build_definition_files);

    // Warnings
    let _ = writeln!(out, "\n{}", heading("Warnings", use_colors));
    for group in &report.findings.duplicates {
        let _ = writeln!(out, ".{} files with identical names:", group.extension);
        if group.entries.is_empty() {
            let _ = writeln!(out, "{}", none_line(use_colors));
        }
        for entry in &group.entries {
            let name = if use_colors {
                Yellow.paint(entry.basename.as_str()).to_string()
            } else {
                entry.basename.clone()
            };
            let indent = " ".repeat(entry.basename.len() + 4);
            for (i, path) in entry.paths.iter().enumerate() {
                if i == 0 {
                    let _ = writeln!(out, "  {}: {}", name, path.display());
                } else {
                    let _ = writeln!(out, "{}{}", indent, path.display());
                }
            }
        }
    }

    // Errors
    let findings = &report.findings;
    let _ = writeln!(out, "\n{}", heading("Errors", use_colors));
    let _ = writeln!(
        out,
        "{}",
        count("# of orphan files", findings.orphans.len(), Red, use_colors)
    );
    if !findings.orphans.is_empty() {
        let _ = writeln!(out, "\nDetails of Orphan Files:");
        for path in findings.orphans.iter().flat_map(|o| &o.paths) {
            let _ = writeln!(out, "- {}", path.display());
        }
    }

    let _ = writeln!(
        out,
        "\n{}",
        count("# of missing files", findings.missing.len(), Red, use_colors)
    );
    if !findings.missing.is_empty() {
        let _ = writeln!(out, "\nDetails of Missing Files:");
        for missing in &findings.missing {
            let _ = writeln!(out, "\n- {}", missing.basename);
            let _ = writeln!(out, "  referenced by:");
            for source in &missing.referenced_by {
                let _ = writeln!(out, "    - {}", source.display());
            }
        }
    }

    out
}

/// One-line summary used in quiet mode
pub fn format_report_brief(report: &AuditReport, use_colors: bool) -> String {
    let findings = &report.findings;
    let line = format!(
        "{}: {} files, {} duplicates, {} orphans, {} missing",
        report.project_name,
        report.statistics.total_files,
        findings.duplicate_count(),
        findings.orphans.len(),
        findings.missing.len()
    );

    if !use_colors {
        return format!("{}\n", line);
    }
    let colour = if findings.is_clean() { Green } else { Yellow };
    format!("{}\n", colour.paint(line))
}

/// Format the report as pretty-printed JSON
pub fn format_report_json(report: &AuditReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| AuditError::JsonSerialize {
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: crate::error::ErrorTrace::capture(),
    })
}

fn extension_of(basename: &str) -> String {
    Path::new(basename)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format every finding as a CSV row: `kind,extension,basename,path`
pub fn format_report_csv(report: &AuditReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["kind", "extension", "basename", "path"])?;

    for group in &report.findings.duplicates {
        for entry in &group.entries {
            for path in &entry.paths {
                let path = path.display().to_string();
                writer.write_record([
                    "duplicate",
                    group.extension.as_str(),
                    entry.basename.as_str(),
                    path.as_str(),
                ])?;
            }
        }
    }

    for orphan in &report.findings.orphans {
        let ext = extension_of(&orphan.basename);
        for path in &orphan.paths {
            let path = path.display().to_string();
            writer.write_record(["orphan", ext.as_str(), orphan.basename.as_str(), path.as_str()])?;
        }
    }

    for missing in &report.findings.missing {
        let ext = extension_of(&missing.basename);
        for source in &missing.referenced_by {
            let source = source.display().to_string();
            writer.write_record(["missing", ext.as_str(), missing.basename.as_str(), source.as_str()])?;
        }
    }

    let data = writer.into_inner().map_err(|e| AuditError::io_error(e.into_error()))?;
    String::from_utf8(data).map_err(|e| {
        AuditError::io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
