//! Sidebar build errors.

use std::path::PathBuf;

use docnav_scan::{NavPath, ScanError};

/// Inconsistent or malformed navigation input.
///
/// Every variant names the version, route or file at fault.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Frozen artifact could not be decoded.
    #[error("Frozen sidebar for version {version} is malformed ({}): {message}", path.display())]
    MalformedArtifact {
        /// Version identifier.
        version: String,
        /// Artifact file.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },
    /// Frozen artifact could not be read.
    #[error("Failed to read frozen sidebar for version {version} ({}): {source}", path.display())]
    ArtifactIo {
        /// Version identifier.
        version: String,
        /// Artifact file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A route occurs twice within one sidebar.
    #[error("Route {route} appears more than once in sidebar {section}")]
    DuplicateRoute {
        /// Sidebar route prefix.
        section: String,
        /// Repeated route.
        route: NavPath,
    },
    /// A version identifier is declared twice.
    #[error("Version {0} is declared more than once")]
    DuplicateVersion(String),
    /// More than one version is built from live content.
    #[error("Only one live version is allowed, found {first} and {second}")]
    MultipleLiveVersions {
        /// First live version.
        first: String,
        /// Second live version.
        second: String,
    },
    /// Two sidebars claim the same route prefix.
    #[error("Sidebar {0} is defined more than once")]
    DuplicateSection(String),
    /// The navbar links to a route with no sidebar.
    #[error("Navbar links to {route} but no sidebar is registered for it")]
    MissingNavbarRoute {
        /// Navbar link.
        route: String,
    },
}

/// Any fatal error raised while building navigation.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
