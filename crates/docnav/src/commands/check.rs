//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(long, env = "DOCNAV_CONTENT_ROOT")]
    content_root: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_root: self.content_root,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let manifest = super::build_manifest(&config, &output)?;

        for (route, section) in manifest.sidebar().iter() {
            output.highlight(route);
            output.info(&format!("  {} routes", section.routes().len()));
        }
        output.success("Navigation is consistent");
        Ok(())
    }
}
