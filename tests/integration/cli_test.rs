use clap::Parser;
use projanitor::{
    cli::{Args, Command, args::OutputFormat as CliOutputFormat},
    config::{CliArgs, CliConfig, ConfigSource},
    models::config::OutputFormat,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["projanitor"]);
    assert_eq!(args.path, None);
    assert!(args.exclude_dirs.is_empty());
    assert_eq!(args.max_depth, None);
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);

    let args = Args::parse_from([
        "projanitor",
        "--path", "/firmware/main",
        "--exclude-dirs", ".git,build",
        "--marker-files", "sdkconfig",
        "--max-depth", "5",
        "--output", "json",
        "--output-file", "audit.json",
        "--quiet",
        "--no-colors",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/firmware/main")));
    assert_eq!(args.exclude_dirs, vec![".git".to_string(), "build".to_string()]);
    assert_eq!(args.marker_files, vec!["sdkconfig".to_string()]);
    assert_eq!(args.max_depth, Some(5));
    assert_eq!(args.output, Some(CliOutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("audit.json")));
    assert!(args.quiet);
    assert!(args.no_colors);
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["projanitor", "--config", "custom-config.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom-config.toml")));
}

#[test]
fn test_cli_args_become_partial_settings() {
    let args = Args::parse_from([
        "projanitor",
        "--extensions", "*.c,.h,CMakeLists.txt",
        "--track", "c",
        "--output", "csv",
        "--verbose",
    ]);

    let partial = CliConfig::new(CliArgs::from(&args)).load().unwrap();

    assert_eq!(partial.extensions, Some(vec!["c".to_string(), "h".to_string()]));
    assert_eq!(partial.filenames, Some(vec!["CMakeLists.txt".to_string()]));
    assert_eq!(partial.duplicate_classes, Some(vec!["c".to_string()]));
    assert_eq!(partial.output_format, Some(OutputFormat::Csv));
    assert_eq!(partial.verbose, Some(true));
    assert_eq!(partial.exclude_dirs, None);
}

#[test]
fn test_audit_command_runs_to_completion() {
    let dir = tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    fs::write(root.join("CMakeLists.txt"), "project(Cli)\nadd_executable(app main.c missing.c)\n").unwrap();
    fs::write(root.join("main.c"), "").unwrap();
    let config = root.join("audit.toml");
    fs::write(&config, "output_format = \"json\"\n").unwrap();
    let report = root.join("report.json");

    let root_arg = root.to_string_lossy().into_owned();
    let config_arg = config.to_string_lossy().into_owned();
    let report_arg = report.to_string_lossy().into_owned();
    let args = Args::parse_from([
        "projanitor",
        "--path", root_arg.as_str(),
        "--config", config_arg.as_str(),
        "--output-file", report_arg.as_str(),
        "--quiet",
    ]);

    let command = Command::from_args(args).unwrap();
    // Findings do not change the exit code
    assert_eq!(command.run(), 0);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["project_name"], "Cli");
    assert_eq!(value["findings"]["missing"][0]["basename"], "missing.c");
}

#[test]
fn test_audit_command_without_root_exits_one() {
    let dir = tempdir().unwrap();
    let start = dir.path().to_string_lossy().into_owned();
    let config = dir.path().join("empty.toml");
    fs::write(&config, "").unwrap();
    let config = config.to_string_lossy().into_owned();

    let args = Args::parse_from([
        "projanitor",
        "--path", start.as_str(),
        "--config", config.as_str(),
        "--marker-files", "projanitor-cli-absent.marker",
        "--max-depth", "1",
        "--quiet",
    ]);

    let command = Command::from_args(args).unwrap();
    assert_eq!(command.run(), 1);
}
