//! Sidebar trees for docnav.
//!
//! This crate provides:
//! - The sidebar data model ([`NavEntry`], [`NavNode`], [`SidebarSection`])
//! - [`NavigationTreeBuilder`]: author ordering merged with content discovery
//! - [`VersionedSidebarRegistry`]: frozen per-version sidebars plus the live one
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), docnav_sidebar::BuildError> {
//! use docnav_sidebar::{CategorySpec, NavigationTreeBuilder, SidebarSpec};
//!
//! let builder = NavigationTreeBuilder::new("docs");
//! let spec = SidebarSpec {
//!     route: "/core/".to_owned(),
//!     dir: "core".to_owned(),
//!     entries: vec![CategorySpec::Dynamic {
//!         title: "Tutorials".to_owned(),
//!         dir: "tutorials".to_owned(),
//!         collapsable: None,
//!     }],
//! };
//! let built = builder.build(&spec)?;
//! # Ok(())
//! # }
//! ```

mod artifact;
mod builder;
mod error;
mod model;
mod registry;
mod spec;

pub use builder::{BuiltSection, NavigationTreeBuilder};
pub use error::{BuildError, ConfigurationError};
pub use model::{NavEntry, NavNode, SidebarSection};
pub use registry::{
    RegisteredVersion, VersionKind, VersionSource, VersionSpec, VersionedSidebarRegistry,
    version_route,
};
pub use spec::{CategorySpec, SidebarSpec};

// Re-export scan types used in this crate's public API
pub use docnav_scan::{
    DEFAULT_EXTENSION, DEFAULT_INDEX_NAME, NavPath, PathNormalizer, ScanError, ScanWarning,
};
