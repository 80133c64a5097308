// src/version.rs
//! Version string reported by `--version` and `GET /api/health`.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
