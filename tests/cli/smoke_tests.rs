use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{TempProject, reference_project};

fn project_stats() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_project_stats"));
    cmd.env_remove("PROJECT_STATS_LOG");
    cmd
}

#[test]
fn shows_help() {
    project_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan").and(predicate::str::contains("serve")));
}

#[test]
fn shows_version() {
    project_stats().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_a_subcommand() {
    project_stats().assert().failure();
}

#[test]
fn scan_prints_the_report() {
    let project = reference_project();

    project_stats()
        .arg("scan")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("\nScanning: {}\n\n", project.path().display())))
        .stdout(predicate::str::contains("Total files: 2\nTotal lines of code: 10\n"))
        .stdout(predicate::str::contains("Language breakdown:\n  - Python (.py): 10 lines (2 files)\n"))
        .stdout(predicate::str::contains("Top 2 largest files:\n  1. a.py \u{2013} 10 lines\n  2. b.py \u{2013} 0 lines\n"))
        .stdout(predicate::str::contains("File Anomalies:\n  Empty files: 1\n  Very small files (<5 lines): 0\n"))
        .stdout(predicate::str::contains("Time Insights:\n  Newest file: "))
        .stdout(predicate::str::contains("c.js").not());
}

#[test]
fn scan_uses_thousands_separators() {
    let project = TempProject::new();
    project.write_lines("big.rs", 12_345);

    project_stats()
        .args(["scan", "--top", "1"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines of code: 12,345"))
        .stdout(predicate::str::contains("  1. big.rs \u{2013} 12,345 lines"));
}

#[test]
fn scan_of_a_tree_without_code() {
    let project = TempProject::new();
    project.write_lines("README", 3);

    project_stats()
        .arg("scan")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  No code files found."))
        .stdout(predicate::str::contains("largest files").not())
        .stdout(predicate::str::contains("Time Insights").not());
}

#[test]
fn missing_path_fails() {
    let project = TempProject::new();
    let missing = project.path().join("missing");

    project_stats()
        .arg("scan")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("Error: Path '{}' does not exist.", missing.display())));
}

#[test]
fn file_path_fails() {
    let project = TempProject::new();
    let file = project.write_lines("x.py", 1);

    project_stats()
        .arg("scan")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory."));
}

#[test]
fn export_writes_the_same_text() {
    let project = reference_project();
    let out = TempProject::new();
    let export = out.path().join("report.txt");

    let assert = project_stats().arg("scan").arg(project.path()).arg("--export").arg(&export).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let exported = fs::read_to_string(&export).unwrap();
    let expected_stdout = format!("{exported}\nReport exported to: {}\n", export.display());
    assert_eq!(stdout, expected_stdout);
}

#[test]
fn export_failure_is_reported_after_the_report() {
    let project = reference_project();
    let out = TempProject::new();
    let export = out.path().join("no-such-dir").join("report.txt");

    project_stats()
        .arg("scan")
        .arg(project.path())
        .arg("--export")
        .arg(&export)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Total files: 2"))
        .stdout(predicate::str::contains("Report exported to").not())
        .stderr(predicate::str::contains(format!("Error: Could not export report to {}", export.display())));
}

#[test]
fn serve_rejects_a_blank_host() {
    project_stats().args(["serve", "--host", " "]).assert().failure().stderr(predicate::str::contains("--host"));
}
