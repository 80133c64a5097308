// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use project_stats_shared_kernel::{Result, ScanWarning};

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEnumerationPlan {
    /// Absolute scan root.
    pub root: PathBuf,
    /// Directory basenames pruned at every depth below the root.
    pub skip_dirs: Vec<String>,
}

/// DTO representing a regular file discovered under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntryDto {
    pub path: PathBuf,
    /// `path` relative to the scan root.
    pub relative: PathBuf,
    pub name: String,
}

/// Everything a traversal produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEnumeration {
    /// Entries in traversal order.
    pub entries: Vec<FileEntryDto>,
    /// Directories or entries that could not be listed.
    pub warnings: Vec<ScanWarning>,
}

/// Port for enumerating file entries.
///
/// Fails with `ScanError::PathNotFound` or `ScanError::NotADirectory` when the
/// root is unusable; problems below the root are reported as warnings.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<FileEnumeration>;
}
