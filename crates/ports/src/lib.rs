//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal producing candidate files
//! - [`measurement`]: line counting and modification time of a single file
//!
//! These ports keep the use case independent of the real filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
