// tests/integration/scan_scenarios.rs
use std::path::PathBuf;

use project_stats::engine;
use project_stats_domain::ScanResult;
use project_stats_shared_kernel::ScanError;
use project_stats_usecase::ScanRequest;

use crate::common::{TempProject, reference_project};

fn scan(project: &TempProject, top_n: usize) -> ScanResult {
    engine::scan(&ScanRequest::new(project.path(), top_n)).expect("scan succeeds")
}

fn largest(result: &ScanResult) -> Vec<(String, usize)> {
    result
        .largest_files
        .iter()
        .map(|f| (f.path.to_string_lossy().replace('\\', "/"), f.lines.value()))
        .collect()
}

#[test]
fn reference_tree() {
    let project = reference_project();
    let result = scan(&project, 5);

    assert_eq!(result.root, project.path());
    assert_eq!(result.total_files, 2usize);
    assert_eq!(result.total_lines, 10usize);
    assert_eq!(result.languages.len(), 1);
    assert_eq!(result.languages[0].ext.as_str(), ".py");
    assert_eq!(result.languages[0].name, "Python");
    assert_eq!(result.languages[0].lines, 10usize);
    assert_eq!(result.languages[0].files, 2usize);
    assert_eq!(result.empty_files, 1usize);
    assert_eq!(result.small_files, 0usize);
    assert_eq!(largest(&result), [("a.py".to_string(), 10), ("b.py".to_string(), 0)]);
    assert!(result.warnings.is_empty());
}

#[test]
fn skipped_subtrees_are_invisible() {
    let project = TempProject::new();
    project.write_lines("src/main.rs", 3);
    for dir in ["node_modules", ".git", "target", "build", "src/__pycache__", "pkg/.venv/lib"] {
        project.write_lines(&format!("{dir}/hidden.py"), 50);
    }

    let result = scan(&project, 5);
    assert_eq!(result.total_files, 1usize);
    assert_eq!(largest(&result), [("src/main.rs".to_string(), 3)]);
}

#[test]
fn unknown_extensions_contribute_nothing() {
    let project = TempProject::new();
    project.write_lines("Makefile", 20);
    project.write_lines(".bashrc", 20);
    project.write_lines("archive.tar.gz", 20);
    project.write_lines("UPPER.PY", 20);
    project.write_lines("kept.R", 2);

    let result = scan(&project, 5);
    assert_eq!(result.total_files, 1usize);
    assert_eq!(result.languages[0].ext.as_str(), ".R");
    assert_eq!(result.languages[0].name, "R");
}

#[test]
fn repeated_scans_are_identical() {
    let project = reference_project();
    project.write_lines("lib/util.ts", 7);
    project.write_lines("lib/more.ts", 7);
    assert_eq!(scan(&project, 5), scan(&project, 5));
}

#[test]
fn largest_files_respect_top_n() {
    let project = TempProject::new();
    for (name, lines) in [("a.rs", 3), ("b.rs", 30), ("c.rs", 12), ("d.rs", 30), ("e.rs", 1)] {
        project.write_lines(name, lines);
    }

    assert_eq!(largest(&scan(&project, 3)), [("b.rs".to_string(), 30), ("d.rs".to_string(), 30), ("c.rs".to_string(), 12)]);
    assert_eq!(scan(&project, 10).largest_files.len(), 5);
    assert!(scan(&project, 0).largest_files.is_empty());
}

#[test]
fn anomaly_boundaries() {
    let project = TempProject::new();
    project.write_lines("zero.py", 0);
    project.write_lines("four.py", 4);
    project.write_lines("five.py", 5);

    let result = scan(&project, 5);
    assert_eq!(result.empty_files, 1usize);
    assert_eq!(result.small_files, 1usize);
}

#[test]
fn line_endings_are_universal() {
    let project = TempProject::new();
    project.write_file("crlf.txt", "a\r\nb\r\n");
    project.write_file("cr.txt", "a\rb\rc");
    project.write_file("tail.txt", "a\nb");

    let result = scan(&project, 5);
    assert_eq!(largest(&result), [("cr.txt".to_string(), 3), ("crlf.txt".to_string(), 2), ("tail.txt".to_string(), 2)]);
}

#[test]
fn modification_time_ties_keep_the_first_file_in_traversal_order() {
    let project = TempProject::new();
    project.write_lines("b.py", 1);
    project.write_lines("a/z.py", 1);
    project.write_lines("c.py", 1);
    project.set_modified_at("b.py", 1_600_000_000);
    project.set_modified_at("a/z.py", 1_600_000_000);
    project.set_modified_at("c.py", 1_700_000_000);

    let result = scan(&project, 5);
    let oldest = result.oldest_file.expect("oldest file");
    let newest = result.newest_file.expect("newest file");
    assert_eq!(oldest.path.to_string_lossy().replace('\\', "/"), "a/z.py");
    assert_eq!(newest.path.as_path(), std::path::Path::new("c.py"));
}

#[test]
fn missing_root_is_path_not_found() {
    let project = TempProject::new();
    let missing = project.path().join("does-not-exist");

    let err = engine::scan(&ScanRequest::new(&missing, 5)).unwrap_err();
    assert_eq!(err.scan_error(), Some(&ScanError::PathNotFound { path: missing.clone() }));
    assert_eq!(err.to_string(), format!("Path '{}' does not exist.", missing.display()));
}

#[test]
fn file_root_is_not_a_directory() {
    let project = TempProject::new();
    let file = project.write_lines("single.py", 1);

    let err = engine::scan(&ScanRequest::new(&file, 5)).unwrap_err();
    assert_eq!(err.scan_error(), Some(&ScanError::NotADirectory { path: file.clone() }));
    assert_eq!(err.to_string(), format!("'{}' is not a directory.", file.display()));
}

#[test]
fn dotted_roots_are_normalised_lexically() {
    let project = TempProject::new();
    project.write_lines("sub/x.go", 2);

    let dotted = project.path().join("sub").join("..").join("sub").join(".");
    let result = engine::scan(&ScanRequest::new(&dotted, 5)).expect("scan succeeds");
    assert_eq!(result.root, PathBuf::from(project.path()).join("sub"));
    assert_eq!(result.total_lines, 2usize);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_excluded_with_a_warning() {
    let project = TempProject::new();
    project.write_lines("ok.py", 3);
    let dangling = project.path().join("dangling.py");
    std::os::unix::fs::symlink(project.path().join("gone.py"), &dangling).expect("symlink");

    let result = scan(&project, 5);

    assert_eq!(result.total_files, 1usize);
    assert_eq!(result.total_lines, 3usize);
    assert_eq!(largest(&result), [("ok.py".to_string(), 3)]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, dangling);
}
