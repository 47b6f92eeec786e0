//! Site assembly.
//!
//! [`SiteAssembler`] collects product sidebars and versioned sidebars, then
//! [`SiteAssembler::assemble`] validates them against the navbar and yields an
//! immutable [`SiteManifest`]. The assembler is consumed; a manifest cannot be
//! reopened.

use docnav_sidebar::{
    BuiltSection, ConfigurationError, ScanWarning, SidebarSection, VersionedSidebarRegistry,
};
use serde::{Serialize, Serializer};

use crate::metadata::SiteMetadata;
use crate::navbar::{Navbar, is_external};
use crate::site_nav::SiteNav;

/// Collects sidebars for one site.
#[derive(Debug)]
pub struct SiteAssembler {
    metadata: SiteMetadata,
    navbar: Navbar,
    sections: Vec<(String, SidebarSection)>,
    warnings: Vec<ScanWarning>,
}

impl SiteAssembler {
    pub fn new(metadata: SiteMetadata, navbar: Navbar) -> Self {
        Self {
            metadata,
            navbar,
            sections: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a product sidebar built from content.
    #[must_use]
    pub fn with_section(mut self, built: BuiltSection) -> Self {
        self.warnings.extend(built.warnings);
        self.sections.push((built.route, built.section));
        self
    }

    /// Add every version of `registry` under its version route.
    #[must_use]
    pub fn with_registry(mut self, registry: &VersionedSidebarRegistry) -> Self {
        self.warnings.extend_from_slice(registry.warnings());
        self.sections.extend(
            registry
                .versions()
                .iter()
                .map(|v| (v.route.clone(), v.section.clone())),
        );
        self
    }

    /// Validate and freeze the site.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateSection`] if two sidebars share
    /// a route prefix and [`ConfigurationError::MissingNavbarRoute`] for the
    /// first internal navbar link no sidebar covers.
    pub fn assemble(self) -> Result<SiteManifest, ConfigurationError> {
        let mut sidebar = SiteNav::default();
        for (route, section) in self.sections {
            sidebar.insert(route, section)?;
        }

        if let Some(missing) = self
            .navbar
            .links()
            .map(|l| l.link.as_str())
            .find(|link| !is_external(link) && !sidebar.covers(link))
        {
            return Err(ConfigurationError::MissingNavbarRoute {
                route: missing.to_owned(),
            });
        }

        tracing::info!(
            sections = sidebar.len(),
            warnings = self.warnings.len(),
            "Site assembled"
        );

        Ok(SiteManifest {
            metadata: self.metadata,
            navbar: self.navbar,
            sidebar,
            warnings: self.warnings,
        })
    }
}

/// Assembled navigation handed to the renderer.
///
/// Read-only: every accessor returns a shared borrow.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteManifest {
    metadata: SiteMetadata,
    navbar: Navbar,
    sidebar: SiteNav,
    warnings: Vec<ScanWarning>,
}

impl SiteManifest {
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn sidebar(&self) -> &SiteNav {
        &self.sidebar
    }

    /// Non-fatal warnings collected during the build.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Pretty-printed JSON. Identical manifests give identical bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if a pass-through value cannot be serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Wire layout of the manifest. Warnings are not part of it.
#[derive(Serialize)]
struct ManifestRef<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    head: &'a [serde_json::Value],
    navbar: &'a Navbar,
    sidebar: &'a SiteNav,
    markdown: &'a [serde_json::Value],
    plugins: &'a [serde_json::Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<&'a serde_json::Value>,
}

impl Serialize for SiteManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let m = &self.metadata;
        ManifestRef {
            title: &m.title,
            description: &m.description,
            icon: m.icon.as_deref(),
            head: &m.head,
            navbar: &self.navbar,
            sidebar: &self.sidebar,
            markdown: &m.markdown,
            plugins: &m.plugins,
            theme: m.theme.as_ref(),
        }
        .serialize(serializer)
    }
}
