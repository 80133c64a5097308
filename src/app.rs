// src/app.rs
use anyhow::{Context, Result};
use chrono::Local;
use project_stats_infra::FileWriter;
use tracing::info;

use crate::{
    cli::{self, Args, Command},
    config::{ScanConfig, ServerConfig},
    engine,
    presentation::TextReport,
    server::ApiServer,
};

/// Dispatches the parsed command line.
///
/// # Errors
///
/// Scan failures keep their own message (`Path '..' does not exist.`) so the
/// caller can print them verbatim after `Error: `.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Scan(scan) => run_scan(&ScanConfig::from(scan)),
        Command::Serve(serve) => {
            cli::validate_serve_args(&serve)?;
            run_server(ServerConfig::from(serve))
        }
    }
}

/// Prints the report, then exports it when asked.
///
/// An export failure is returned after the report has been printed.
pub fn run_scan(config: &ScanConfig) -> Result<()> {
    let result = engine::scan(&config.request())?;
    let report = TextReport::render(&result, &Local::now());
    print!("{report}");

    if let Some(export) = &config.export {
        FileWriter::write_report(export, &report.to_export_text())?;
        println!("Report exported to: {}", export.display());
    }
    Ok(())
}

fn run_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    info!(web_dir = %config.web_dir.display(), default_top = config.default_top_n, "starting server");
    runtime.block_on(ApiServer::new(config).start())
}
