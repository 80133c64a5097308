// src/config.rs
//! Runtime configuration built from the parsed command line.
//!
//! There is no configuration file; every value has a compiled-in default.

use std::path::PathBuf;

use project_stats_domain::DEFAULT_TOP_N;
use project_stats_usecase::ScanRequest;

use crate::cli::{ScanArgs, ServeArgs};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WEB_DIR: &str = "web";

/// Settings of one `scan` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub top_n: usize,
    /// Where to write a copy of the text report.
    pub export: Option<PathBuf>,
}

impl ScanConfig {
    pub fn request(&self) -> ScanRequest {
        ScanRequest::new(&self.root, self.top_n)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("."), top_n: DEFAULT_TOP_N, export: None }
    }
}

impl From<ScanArgs> for ScanConfig {
    fn from(args: ScanArgs) -> Self {
        Self { root: args.path, top_n: args.top, export: args.export }
    }
}

/// Settings of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Static files served for every path outside `/api`.
    pub web_dir: PathBuf,
    /// `top` used when a scan request omits it.
    pub default_top_n: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self { host: args.host, port: args.port, web_dir: args.web_dir, default_top_n: args.top }
    }
}
