//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the project scan, from root validation to the final result
//! - [`dto`]: request object crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::ScanRequest;
pub use orchestrator::ScanProject;
