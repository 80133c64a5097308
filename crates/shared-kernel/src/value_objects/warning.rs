use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::InfrastructureError;

/// Non-fatal problem met during a scan. The affected path is excluded from every statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }

    /// Builds a warning from an infrastructure failure, keeping only the root cause text.
    pub fn from_error(fallback_path: impl Into<PathBuf>, err: &InfrastructureError) -> Self {
        let path = err.path().map_or_else(|| fallback_path.into(), std::path::Path::to_path_buf);
        let message = match err {
            InfrastructureError::FileRead { source, .. }
            | InfrastructureError::FileSystemOperation { source, .. } => source.to_string(),
            InfrastructureError::Walk { details, .. } => details.clone(),
            other => other.to_string(),
        };
        Self { path, message }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not read {}: {}", self.path.display(), self.message)
    }
}
