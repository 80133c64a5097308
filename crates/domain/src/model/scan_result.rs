use std::path::PathBuf;

use project_stats_shared_kernel::{FileCount, LineCount, ScanWarning};

use super::{FileStamp, LanguageAggregate, RankedFile};

/// Outcome of one scan. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Absolute, normalised scan root.
    pub root: PathBuf,
    pub total_files: FileCount,
    pub total_lines: LineCount,
    /// Descending by lines; ties keep first-encounter order.
    pub languages: Vec<LanguageAggregate>,
    /// Descending by lines, at most `top_n` entries; ties keep traversal order.
    pub largest_files: Vec<RankedFile>,
    pub empty_files: FileCount,
    pub small_files: FileCount,
    pub newest_file: Option<FileStamp>,
    pub oldest_file: Option<FileStamp>,
    /// Files and directories that could not be read.
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.total_files.is_zero()
    }

    pub fn has_anomalies(&self) -> bool {
        !self.empty_files.is_zero() || !self.small_files.is_zero()
    }
}
