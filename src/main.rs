// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use project_stats::{app, cli::Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
