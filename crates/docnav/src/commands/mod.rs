//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod routes;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;

use docnav_config::Config;
use docnav_site::{SiteManifest, build_site};

use crate::error::CliError;
use crate::output::Output;

/// Run one build pass for `config`, reporting source and warnings.
fn build_manifest(config: &Config, output: &Output) -> Result<SiteManifest, CliError> {
    output.info(&format!(
        "Content: {}",
        config.content_resolved.root.display()
    ));

    let manifest = build_site(&config.plan())?;
    for warning in manifest.warnings() {
        output.warning(&format!("Warning: {warning}"));
    }
    Ok(manifest)
}
