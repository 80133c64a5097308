// src/cli/mod.rs
mod args;

pub use args::{Args, Command, ScanArgs, ServeArgs};
use project_stats_shared_kernel::{PresentationError, PresentationResult};

/// Checks the values clap cannot express as types.
pub fn validate_serve_args(args: &ServeArgs) -> PresentationResult<()> {
    validate_host("--host", &args.host)
}

fn validate_host(field: &str, host: &str) -> PresentationResult<()> {
    if host.trim().is_empty() {
        return Err(PresentationError::InvalidValue {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if host.chars().any(char::is_whitespace) {
        return Err(PresentationError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{host}' must not contain whitespace"),
        });
    }
    Ok(())
}
