//! Author-facing sidebar specifications.
//!
//! These types deserialize straight from `docnav.toml`:
//!
//! ```toml
//! [[sidebars]]
//! route = "/core/"
//! dir = "core"
//!
//! [[sidebars.entries]]
//! kind = "route"
//! route = "/core/"
//!
//! [[sidebars.entries]]
//! kind = "list"
//! title = "Welcome"
//! children = ["welcome/what_is_prefect", "welcome/why_prefect"]
//!
//! [[sidebars.entries]]
//! kind = "dynamic"
//! title = "Tutorials"
//! dir = "tutorials"
//! ```

use docnav_scan::NavPath;
use serde::Deserialize;

/// One author-specified sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategorySpec {
    /// Literal route reference.
    Route {
        /// Target route.
        route: NavPath,
    },
    /// Named category with an explicitly ordered list of routes.
    List {
        /// Category title.
        title: String,
        /// Child routes in author order.
        children: Vec<NavPath>,
        /// Overrides the section default when set.
        #[serde(default)]
        collapsable: Option<bool>,
    },
    /// Named category whose children are discovered from a directory.
    Dynamic {
        /// Category title.
        title: String,
        /// Directory relative to the section's content directory.
        dir: String,
        /// Overrides the section default when set.
        #[serde(default)]
        collapsable: Option<bool>,
    },
    /// Titled leaf pointing at a route or external URL.
    Link {
        /// Display title.
        title: String,
        /// Link target.
        target: NavPath,
    },
}

impl CategorySpec {
    /// True for entries that group children (`List` and `Dynamic`).
    pub fn is_category(&self) -> bool {
        matches!(self, Self::List { .. } | Self::Dynamic { .. })
    }
}

/// Sidebar for one top-level route.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarSpec {
    /// Top-level route prefix (e.g., `/core/`).
    pub route: String,
    /// Content directory relative to the content root (e.g., `core`).
    pub dir: String,
    /// Entries in display order.
    #[serde(default)]
    pub entries: Vec<CategorySpec>,
}
