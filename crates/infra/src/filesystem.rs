// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, WalkBuilder};
use project_stats_ports::filesystem::{FileEntryDto, FileEnumeration, FileEnumerationPlan, FileEnumerator};
use project_stats_shared_kernel::{InfrastructureError, Result, ScanError, ScanWarning, path::relative_to};
use tracing::warn;

/// Filesystem adapter implementing the `FileEnumerator` port.
///
/// Traversal is depth-first and single-threaded. Within a directory, entries
/// are visited in byte order of their names, files and subdirectories
/// interleaved, so repeated scans see files in the same order.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<FileEnumeration> {
        validate_root(&plan.root)?;
        Ok(walk(plan))
    }
}

/// Anything that cannot be stat'ed counts as missing.
fn validate_root(root: &Path) -> std::result::Result<(), ScanError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory { path: root.to_path_buf() }),
        Err(_) => Err(ScanError::PathNotFound { path: root.to_path_buf() }),
    }
}

fn walk(plan: &FileEnumerationPlan) -> FileEnumeration {
    let skip: HashSet<String> = plan.skip_dirs.iter().cloned().collect();

    let mut builder = WalkBuilder::new(&plan.root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_skipped_dir(entry, &skip));

    let mut out = FileEnumeration::default();
    for item in builder.build() {
        match item {
            Ok(entry) => {
                if is_scannable_file(&entry) {
                    out.entries.push(to_dto(&entry, &plan.root));
                }
            }
            Err(err) => {
                let path = error_path(&err).unwrap_or_else(|| plan.root.clone());
                warn!(path = %path.display(), error = %err, "could not read directory entry, skipping");
                let walk_err = InfrastructureError::Walk { details: root_cause(&err), path };
                out.warnings.push(ScanWarning::from_error(&plan.root, &walk_err));
            }
        }
    }
    out
}

// The root itself is never pruned, whatever its name.
fn is_skipped_dir(entry: &DirEntry, skip: &HashSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry.file_name().to_str().is_some_and(|name| skip.contains(name))
}

// Symlinked directories are not followed, but a symlink to a regular file is
// scanned like the file itself. A dangling link stays a candidate so the
// failed open is reported.
fn is_scannable_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).map_or(true, |meta| meta.is_file()),
        _ => false,
    }
}

fn to_dto(entry: &DirEntry, root: &Path) -> FileEntryDto {
    let path = entry.path().to_path_buf();
    FileEntryDto {
        relative: relative_to(&path, root),
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}

fn root_cause(err: &ignore::Error) -> String {
    match err {
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => root_cause(err),
        other => other.to_string(),
    }
}
