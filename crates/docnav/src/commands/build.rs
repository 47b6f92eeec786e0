//! `docnav build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(long, env = "DOCNAV_CONTENT_ROOT")]
    content_root: Option<PathBuf>,

    /// Output file (default: .docnav/navigation.json).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_root: self.content_root,
            output: self.output,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let manifest = super::build_manifest(&config, &output)?;
        let json = manifest.to_json()?;

        if config.output_path.starts_with(&config.content_resolved.project_dir) {
            ensure_project_dir(&config.content_resolved.project_dir)?;
        }
        write_manifest(&config.output_path, &json)?;

        output.success(&format!(
            "Navigation written to {} ({} sidebars)",
            config.output_path.display(),
            manifest.sidebar().len()
        ));
        Ok(())
    }
}

/// Ensure the `.docnav/` project directory exists with a `.gitignore`.
fn ensure_project_dir(project_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(project_dir).map_err(|source| CliError::Write {
        path: project_dir.to_path_buf(),
        source,
    })?;

    let gitignore_path = project_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by docnav\n*\n");
    }

    Ok(())
}

/// Write `json` to `path`, creating parent directories.
fn write_manifest(path: &Path, json: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, format!("{json}\n")).map_err(write_err)
}
