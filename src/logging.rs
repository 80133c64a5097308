// src/logging.rs
//! Tracing subscriber set-up for the binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive, e.g.
/// `PROJECT_STATS_LOG=project_stats_infra=debug,tower_http=info`.
pub const LOG_ENV: &str = "PROJECT_STATS_LOG";

/// Installs a stderr subscriber. `PROJECT_STATS_LOG` wins over `default_level`.
///
/// Calling it again is a no-op.
pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
