// crates/ports/src/measurement.rs
use std::path::Path;

use project_stats_shared_kernel::{InfraResult, LineCount, ModificationTime};

/// What a measurer learns about one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeasurement {
    pub lines: LineCount,
    pub modified: ModificationTime,
}

/// Port for measuring a single file.
pub trait FileMeasurer: Send + Sync {
    fn measure(&self, path: &Path) -> InfraResult<FileMeasurement>;
}
