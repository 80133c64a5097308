// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfraResult, InfrastructureError, PresentationError, PresentationResult, ProjectStatsError,
    Result, ScanError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FileCount, FileExtension, FilePath, LineCount, ModificationTime, ScanWarning};
