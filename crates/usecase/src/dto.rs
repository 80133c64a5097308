use std::path::PathBuf;

use project_stats_domain::DEFAULT_TOP_N;

/// Input of [`crate::ScanProject::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Root as given by the caller; it may be relative.
    pub root: PathBuf,
    /// Length bound of the largest-files list.
    pub top_n: usize,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>, top_n: usize) -> Self {
        Self { root: root.into(), top_n }
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self::new(".", DEFAULT_TOP_N)
    }
}
