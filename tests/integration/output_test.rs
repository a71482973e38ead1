use projanitor::{
    core::Auditor,
    models::config::{OutputFormat, Settings},
    output::{FileWriter, OutputWriter, create_formatter},
};
use std::fs;
use tempfile::tempdir;

fn sample_report() -> (tempfile::TempDir, projanitor::AuditReport) {
    let dir = tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    let write = |relative: &str, content: &str| {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };

    write("CMakeLists.txt", "project(Report)\nadd_executable(app main/main.c main/wifi.c)\n");
    write("main/main.c", "");
    write("a/util.c", "");
    write("b/util.c", "");
    write("doc/index.md", "");

    let settings = Settings {
        start_path: root.clone(),
        ..Settings::default()
    };
    let report = Auditor::new(settings).run().unwrap();
    (dir, report)
}

#[test]
fn test_text_report_sections() {
    let (_dir, report) = sample_report();
    let output = create_formatter(OutputFormat::Text, false, false)
        .format(&report)
        .unwrap();

    let summary = output.find("=== Summary ===").unwrap();
    let statistics = output.find("=== Statistics ===").unwrap();
    let warnings = output.find("=== Warnings ===").unwrap();
    let errors = output.find("=== Errors ===").unwrap();
    assert!(summary < statistics && statistics < warnings && warnings < errors);

    assert!(output.contains("Project name: Report"));
    assert!(output.contains(&format!("  - {}", report.root.join("doc").display())));
    assert!(output.contains(".c files with identical names:\n  util.c: "));
    assert!(output.contains("# of orphan files: 2"));
    assert!(output.contains("# of missing files: 1"));
    assert!(output.contains("- wifi.c\n  referenced by:\n"));
}

#[test]
fn test_csv_report_rows() {
    let (_dir, report) = sample_report();
    let output = create_formatter(OutputFormat::Csv, false, false)
        .format(&report)
        .unwrap();

    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    let kinds: Vec<_> = rows.iter().map(|r| r[0].to_string()).collect();
    assert_eq!(
        kinds,
        vec!["duplicate", "duplicate", "orphan", "orphan", "orphan", "missing"]
    );
    assert!(rows.iter().all(|r| r.len() == 4));
}

#[test]
fn test_report_written_to_file() {
    let (dir, report) = sample_report();
    let path = dir.path().join("audit.json");

    let output = create_formatter(OutputFormat::Json, false, false)
        .format(&report)
        .unwrap();
    FileWriter::new(&path).write(&output).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["project_name"], "Report");
    assert_eq!(value["findings"]["duplicates"][0]["entries"][0]["basename"], "util.c");
}
