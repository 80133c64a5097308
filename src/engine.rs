// src/engine.rs
use project_stats_domain::ScanResult;
use project_stats_infra::{LineMeasurer, WalkFileEnumerator};
use project_stats_shared_kernel::Result;
use project_stats_usecase::{ScanProject, ScanRequest};

/// Scans a directory with the filesystem adapters and the built-in rules.
///
/// Shared by the console and HTTP entry points.
///
/// # Errors
///
/// Fails with [`project_stats_shared_kernel::ScanError`] when the root is
/// missing or is not a directory.
pub fn scan(request: &ScanRequest) -> Result<ScanResult> {
    let enumerator = WalkFileEnumerator::new();
    let measurer = LineMeasurer::new();
    ScanProject::new(&enumerator, &measurer).run(request)
}
