//! End-to-end audits over small fixture projects

use projanitor::{
    core::{Auditor, RootLocator},
    error::AuditError,
    models::{analysis::AuditReport, config::Settings},
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A canonical temp project; `root()` holds the marker so the locator stops
/// in its first phase.
struct Fixture {
    _dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        Self { _dir: dir, root }
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn audit(&self) -> AuditReport {
        self.audit_from(self.root())
    }

    fn audit_from(&self, start: &Path) -> AuditReport {
        let settings = Settings {
            start_path: start.to_path_buf(),
            ..Settings::default()
        };
        Auditor::new(settings).run().unwrap()
    }
}

fn orphan_names(report: &AuditReport) -> Vec<&str> {
    report.findings.orphans.iter().map(|o| o.basename.as_str()).collect()
}

fn missing_names(report: &AuditReport) -> Vec<&str> {
    report.findings.missing.iter().map(|m| m.basename.as_str()).collect()
}

#[test]
fn test_project_name_from_root_build_definition() {
    let project = Fixture::new();
    project.write(
        "CMakeLists.txt",
        "cmake_minimum_required(VERSION 3.16)\nproject(Foo)\n",
    );

    let report = project.audit();
    assert_eq!(report.project_name, "Foo");
    assert_eq!(report.root, project.root());
}

#[test]
fn test_duplicate_sources_listed_once_with_both_paths() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Dup)\n");
    let first = project.write("components/a/util.c", "");
    let second = project.write("components/b/util.c", "");

    let report = project.audit();

    let c_group = report
        .findings
        .duplicates
        .iter()
        .find(|g| g.extension == "c")
        .unwrap();
    assert_eq!(c_group.entries.len(), 1);
    assert_eq!(c_group.entries[0].basename, "util.c");
    assert_eq!(c_group.entries[0].paths, vec![first, second]);
    assert_eq!(report.findings.duplicate_count(), 1);
}

#[test]
fn test_unresolvable_include_is_not_reported_missing() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Inc)\nadd_executable(app main/main.c)\n");
    project.write("main/main.c", "#include \"foo.h\"\n#include \"board.h\"\n");
    // Exists, but not next to the including file
    project.write("include/board.h", "");

    let report = project.audit();

    assert!(!missing_names(&report).contains(&"foo.h"));
    assert!(report.findings.missing.is_empty());
    assert!(orphan_names(&report).contains(&"board.h"));
}

#[test]
fn test_missing_python_module_is_reported() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Py)\nadd_custom_target(gen tools/gen.py)\n");
    let script = project.write("tools/gen.py", "from helpers import thing\n");

    let report = project.audit();

    assert_eq!(missing_names(&report), vec!["helpers.py"]);
    assert_eq!(report.findings.missing[0].referenced_by, vec![script]);
}

#[test]
fn test_build_directory_is_excluded_everywhere() {
    let project = Fixture::new();
    project.write("LICENSE", "");
    project.write("build/sdkconfig", "");
    project.write("build/stale.c", "");
    project.write("build/CMakeLists.txt", "add_executable(x ghost.c)\n");

    let report = project.audit();

    assert_eq!(report.excluded, vec![project.root().join("build")]);
    assert!(!orphan_names(&report).contains(&"stale.c"));
    assert!(!missing_names(&report).contains(&"ghost.c"));
    assert_eq!(report.statistics.total_files, 0);
}

#[test]
fn test_locator_never_roots_inside_excluded_directory() {
    let project = Fixture::new();
    let workspace = project.root().join("workspace");
    project.write("workspace/build/sdkconfig", "");
    project.write("workspace/src/app/sdkconfig", "");

    let settings = Settings::default();
    let root = RootLocator::new(settings.marker_set(), settings.max_depth)
        .with_exclusions(settings.exclusion_set())
        .locate(&workspace)
        .unwrap();

    assert_eq!(root, workspace.join("src").join("app"));
}

#[test]
fn test_orphans_and_missing_never_overlap() {
    let project = Fixture::new();
    project.write(
        "CMakeLists.txt",
        "project(Mix)\nadd_executable(app main.c net.c)\n# legacy.c was removed\n",
    );
    project.write("main.c", "#include \"main.h\"\n");
    project.write("main.h", "");
    project.write("extra.c", "");
    project.write("scripts/run.py", "from tools.flash import go\n");
    project.write("scripts/flash.sh", "");

    let report = project.audit();

    let orphans: BTreeSet<_> = orphan_names(&report).into_iter().collect();
    let missing: BTreeSet<_> = missing_names(&report).into_iter().collect();
    assert!(orphans.is_disjoint(&missing));
    assert_eq!(
        orphans,
        BTreeSet::from(["CMakeLists.txt", "extra.c", "flash.sh", "run.py"])
    );
    assert_eq!(missing, BTreeSet::from(["flash.py", "legacy.c", "net.c"]));
}

#[test]
fn test_statistics_and_subfolders() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Stats)\n");
    project.write("main/CMakeLists.txt", "idf_component_register(SRCS \"main.c\")\n");
    project.write("main/main.c", "");
    project.write("main/board.h", "");
    project.write("README.md", "");
    project.write("main/notes.txt", "");

    let report = project.audit();

    assert_eq!(report.statistics.total_files, 5);
    assert_eq!(report.statistics.per_extension["c"], 1);
    assert_eq!(report.statistics.per_extension["md"], 1);
    assert_eq!(report.statistics.per_extension["py"], 0);
    assert_eq!(report.statistics.build_definition_files, 2);
    assert_eq!(
        report.subfolders.get("main"),
        Some(&project.root().join("main"))
    );
}

#[test]
fn test_audit_is_repeatable() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Same)\nadd_executable(a a.c gone.c)\n");
    project.write("x/a.c", "");
    project.write("y/a.c", "");
    project.write("z/b.h", "");

    let first = project.audit();
    let second = project.audit();

    assert_eq!(first.findings, second.findings);
    assert_eq!(first.statistics, second.statistics);
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        start_path: dir.path().to_path_buf(),
        marker_files: vec!["projanitor-integration-absent.marker".to_string()],
        max_depth: 1,
        ..Settings::default()
    };

    let err = Auditor::new(settings).run().unwrap_err();
    assert!(matches!(err, AuditError::RootNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_cataloged() {
    let project = Fixture::new();
    project.write("CMakeLists.txt", "project(Links)\n");
    let real = project.write("src/real.c", "");
    std::os::unix::fs::symlink(&real, project.root().join("src/alias.c")).unwrap();
    std::os::unix::fs::symlink(project.root().join("src"), project.root().join("mirror")).unwrap();

    let report = project.audit();

    assert_eq!(report.statistics.total_files, 2);
    assert!(!orphan_names(&report).contains(&"alias.c"));
    assert!(report.findings.duplicates.iter().all(|g| g.entries.is_empty()));
    assert!(!report.subfolders.contains_key("mirror"));
}
