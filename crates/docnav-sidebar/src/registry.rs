//! Versioned sidebar registry.
//!
//! Released API versions are pinned: their sidebars come from frozen
//! artifacts and are never derived from the content tree. The single live
//! version (usually `unreleased`) is rebuilt from content on every load.

use std::collections::HashSet;
use std::path::PathBuf;

use docnav_scan::ScanWarning;
use rayon::prelude::*;

use crate::artifact::load_frozen;
use crate::builder::NavigationTreeBuilder;
use crate::error::{BuildError, ConfigurationError};
use crate::model::SidebarSection;
use crate::spec::{CategorySpec, SidebarSpec};

/// Where a version's sidebar comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionSource {
    /// Frozen artifact file, loaded verbatim.
    Frozen(PathBuf),
    /// Built from content under `dir` (relative to the content root).
    Live {
        /// Content directory of the live snapshot.
        dir: String,
        /// Sidebar entries in author order.
        entries: Vec<CategorySpec>,
    },
}

/// One declared version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionSpec {
    /// Version identifier (e.g., `0.7.3`, `unreleased`).
    pub id: String,
    pub source: VersionSource,
}

/// How a registered sidebar was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionKind {
    Frozen,
    Live,
}

/// A loaded version sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredVersion {
    /// Version identifier.
    pub id: String,
    /// Route prefix (e.g., `/api/0.7.3/`).
    pub route: String,
    pub kind: VersionKind,
    pub section: SidebarSection,
}

/// Sidebars for every declared version, in display order.
///
/// Constructed once per build and passed by reference to the assembler.
#[derive(Clone, Debug)]
pub struct VersionedSidebarRegistry {
    route_prefix: String,
    versions: Vec<RegisteredVersion>,
    warnings: Vec<ScanWarning>,
}

/// Parallel load result, kept in declaration order.
enum Loaded<'a> {
    Frozen(Result<SidebarSection, ConfigurationError>),
    Live {
        dir: &'a str,
        entries: &'a [CategorySpec],
    },
}

impl VersionedSidebarRegistry {
    /// Load every version declared in `specs`.
    ///
    /// Frozen artifacts are read in parallel; the live version is built with
    /// [`NavigationTreeBuilder::build_reference`], so none of its categories
    /// start expanded. Version routes are `{route_prefix}{id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for duplicate ids, more than one live
    /// version, or an unreadable/malformed artifact (the first in declaration
    /// order), and [`BuildError::Scan`] if live content cannot be scanned.
    pub fn load(
        route_prefix: &str,
        specs: &[VersionSpec],
        builder: &NavigationTreeBuilder,
    ) -> Result<Self, BuildError> {
        validate_specs(specs)?;

        let loaded: Vec<Loaded<'_>> = specs
            .par_iter()
            .map(|spec| match &spec.source {
                VersionSource::Frozen(path) => Loaded::Frozen(load_frozen(&spec.id, path)),
                VersionSource::Live { dir, entries } => Loaded::Live { dir, entries },
            })
            .collect();

        let mut versions = Vec::with_capacity(specs.len());
        let mut warnings = Vec::new();
        for (spec, loaded) in specs.iter().zip(loaded) {
            let route = version_route(route_prefix, &spec.id);
            let (kind, section) = match loaded {
                Loaded::Frozen(result) => (VersionKind::Frozen, result?),
                Loaded::Live { dir, entries } => {
                    let built = builder.build_reference(&SidebarSpec {
                        route: route.clone(),
                        dir: dir.to_owned(),
                        entries: entries.to_vec(),
                    })?;
                    warnings.extend(built.warnings);
                    (VersionKind::Live, built.section)
                }
            };
            tracing::debug!(version = %spec.id, route = %route, ?kind, "Version sidebar registered");
            versions.push(RegisteredVersion {
                id: spec.id.clone(),
                route,
                kind,
                section,
            });
        }

        tracing::info!(versions = versions.len(), "Versioned sidebars loaded");

        Ok(Self {
            route_prefix: route_prefix.to_owned(),
            versions,
            warnings,
        })
    }

    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// Versions in display order (newest first, as declared).
    pub fn versions(&self) -> &[RegisteredVersion] {
        &self.versions
    }

    /// Sidebar registered under a version route (e.g., `/api/0.7.3/`).
    pub fn get(&self, route: &str) -> Option<&SidebarSection> {
        self.versions
            .iter()
            .find(|v| v.route == route)
            .map(|v| &v.section)
    }

    /// The version rebuilt from content, if one is declared.
    pub fn live_version(&self) -> Option<&RegisteredVersion> {
        self.versions.iter().find(|v| v.kind == VersionKind::Live)
    }

    /// Warnings raised while building the live version.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }
}

/// Route for a version: `/api/` + `0.7.3` -> `/api/0.7.3/`.
pub fn version_route(route_prefix: &str, id: &str) -> String {
    let prefix = route_prefix.trim_end_matches('/');
    format!("{prefix}/{id}/")
}

fn validate_specs(specs: &[VersionSpec]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    let mut live: Option<&str> = None;
    for spec in specs {
        if !seen.insert(spec.id.as_str()) {
            return Err(ConfigurationError::DuplicateVersion(spec.id.clone()));
        }
        if matches!(spec.source, VersionSource::Live { .. }) {
            if let Some(first) = live {
                return Err(ConfigurationError::MultipleLiveVersions {
                    first: first.to_owned(),
                    second: spec.id.clone(),
                });
            }
            live = Some(&spec.id);
        }
    }
    Ok(())
}
