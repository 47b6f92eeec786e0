//! `docnav routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use docnav_config::{CliSettings, Config};
use docnav_scan::{ContentScanner, ScanOutput};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Directory to scan, relative to the content root (e.g., `core/tutorials`).
    dir: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(long, env = "DOCNAV_CONTENT_ROOT")]
    content_root: Option<PathBuf>,
}

impl RoutesArgs {
    /// Print discovered routes to stdout, one per line, in sidebar order.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let scanned = self.scan()?;

        if let Some(warning) = &scanned.warning {
            output.warning(&format!("Warning: {warning}"));
        }
        let stdout = Term::stdout();
        for route in &scanned.routes {
            stdout.write_line(route.as_str())?;
        }
        tracing::debug!(dir = %self.dir, routes = scanned.routes.len(), "Routes listed");
        Ok(())
    }

    /// Load the config and scan `dir` below its content root.
    fn scan(&self) -> Result<ScanOutput, CliError> {
        let cli_settings = CliSettings {
            content_root: self.content_root.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let scanner = ContentScanner::with_normalizer(
            &config.content_resolved.root,
            config.content_resolved.normalizer(),
        )?;
        Ok(scanner.scan(&self.dir)?)
    }
}
