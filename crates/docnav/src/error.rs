//! CLI error types.

use docnav_config::ConfigError;
use docnav_scan::ScanError;
use docnav_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize navigation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
