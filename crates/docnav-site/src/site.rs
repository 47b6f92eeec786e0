//! One build pass from plan to manifest.

use std::path::PathBuf;

use docnav_sidebar::{
    BuildError, NavigationTreeBuilder, PathNormalizer, SidebarSpec, VersionSpec,
    VersionedSidebarRegistry,
};

use crate::assembler::{SiteAssembler, SiteManifest};
use crate::metadata::SiteMetadata;
use crate::navbar::Navbar;

/// Versioned API reference sidebars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiPlan {
    /// Prefix shared by all version routes (e.g., `/api/`).
    pub route: String,
    /// Versions in display order.
    pub versions: Vec<VersionSpec>,
}

/// Everything needed to build a site's navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct SitePlan {
    /// Root of the markdown content tree.
    pub content_root: PathBuf,
    pub normalizer: PathNormalizer,
    pub metadata: SiteMetadata,
    pub navbar: Navbar,
    /// Product sidebars (e.g., `/core/`, `/cloud/`).
    pub sidebars: Vec<SidebarSpec>,
    pub api: Option<ApiPlan>,
}

/// Build every sidebar in `plan` and assemble the manifest.
///
/// Sidebars are built in declaration order, so the first failing one is the
/// one reported.
///
/// # Errors
///
/// Returns [`BuildError`] if content cannot be scanned or the navigation is
/// inconsistent.
pub fn build_site(plan: &SitePlan) -> Result<SiteManifest, BuildError> {
    let builder =
        NavigationTreeBuilder::with_normalizer(&plan.content_root, plan.normalizer.clone());

    let mut assembler = SiteAssembler::new(plan.metadata.clone(), plan.navbar.clone());
    for spec in &plan.sidebars {
        assembler = assembler.with_section(builder.build(spec)?);
    }
    if let Some(api) = &plan.api {
        let registry = VersionedSidebarRegistry::load(&api.route, &api.versions, &builder)?;
        assembler = assembler.with_registry(&registry);
    }

    let manifest = assembler.assemble()?;
    for warning in manifest.warnings() {
        tracing::warn!(%warning, "Build warning");
    }
    Ok(manifest)
}
