// src/lib.rs
//! # project_stats
//!
//! Scans a project tree and reports lines of code per language, the largest
//! files, suspiciously short files and the newest/oldest file.
//!
//! The scan itself lives in the workspace crates (`project_stats_domain`,
//! `project_stats_usecase`, `project_stats_infra`); this crate adds the two
//! entry points on top of [`engine::scan`]:
//!
//! - the `scan` subcommand, rendering a [`presentation::TextReport`]
//! - the `serve` subcommand, an axum [`server::ApiServer`] answering
//!   `POST /api/scan` with a [`presentation::ScanResponse`]

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod presentation;
pub mod server;
mod version;

pub use version::VERSION;
