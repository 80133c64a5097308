// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ProjectStatsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ProjectStatsError>,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ProjectStatsError>;

impl ProjectStatsError {
    /// Returns the root validation failure behind this error, looking through context layers.
    pub fn scan_error(&self) -> Option<&ScanError> {
        match self {
            Self::Scan(err) => Some(err),
            Self::Context { source, .. } => source.scan_error(),
            _ => None,
        }
    }
}

/// Fatal failures while validating the scan root.
///
/// Messages match what users see on the console and in HTTP error bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Path '{}' does not exist.", path.display())]
    PathNotFound { path: PathBuf },

    #[error("'{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not export report to {}: {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{}': {details}", path.display())]
    Walk { path: PathBuf, details: String },

    #[error("File system operation failed: {operation} on '{}': {source}", path.display())]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    /// Path the failure is attached to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileRead { path, .. }
            | Self::ExportWrite { path, .. }
            | Self::Walk { path, .. }
            | Self::FileSystemOperation { path, .. } => Some(path),
            Self::OutputError { .. } => None,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ProjectStatsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ProjectStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ProjectStatsError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ProjectStatsError::Context { context: f(), source: Box::new(e.into()) })
    }
}
