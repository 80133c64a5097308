// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use project_stats_domain::DEFAULT_TOP_N;
use tracing::level_filters::LevelFilter;

use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WEB_DIR};

const LEVELS: [LevelFilter; 5] =
    [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE];

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "project_stats",
    version = crate::VERSION,
    about = "Lines of code per language, largest files, anomalies and file age for a project tree",
    propagate_version = true
)]
pub struct Args {
    /// Log more (repeatable: -v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a directory and print the report
    Scan(ScanArgs),
    /// Serve the web front end and the JSON API
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Project folder to scan
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Number of largest files to list
    #[arg(long, default_value_t = DEFAULT_TOP_N, help_heading = "Output")]
    pub top: usize,

    /// Also write the report to this file
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub export: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST, help_heading = "Server")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT, help_heading = "Server")]
    pub port: u16,

    /// Directory holding the static front end
    #[arg(long, default_value = DEFAULT_WEB_DIR, value_hint = ValueHint::DirPath, help_heading = "Server")]
    pub web_dir: PathBuf,

    /// Largest files listed when a request does not say
    #[arg(long, default_value_t = DEFAULT_TOP_N, help_heading = "Server")]
    pub top: usize,
}

impl Args {
    /// Effective log level: `warn` for `scan`, `info` for `serve`, shifted by `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        let base = match self.command {
            Command::Scan(_) => 1,
            Command::Serve(_) => 2,
        };
        LEVELS[(base + usize::from(self.verbose)).min(LEVELS.len() - 1)]
    }
}
