//! Sidebar data model.
//!
//! A [`SidebarSection`] is an ordered list of [`NavEntry`] values. Entries
//! serialize either as a bare route string or as a structured node:
//!
//! ```json
//! [
//!   "/core/",
//!   { "title": "Tutorials", "collapsable": true, "children": ["tutorials/first"] }
//! ]
//! ```

use std::collections::HashSet;

use docnav_scan::NavPath;
use serde::{Deserialize, Serialize};

/// One sidebar entry: a bare route or a titled node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Bare route; the renderer takes the title from the page.
    Route(NavPath),
    /// Titled node, optionally with a link target and children.
    Node(NavNode),
}

/// Titled sidebar node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display title. Independent of any route.
    pub title: String,
    /// Link target, serialized as `path`.
    #[serde(rename = "path", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NavPath>,
    /// Whether the renderer may collapse this node.
    #[serde(default = "default_collapsable")]
    pub collapsable: bool,
    /// Child entries in display order.
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

/// Renderers collapse groups unless told otherwise.
fn default_collapsable() -> bool {
    true
}

impl NavNode {
    /// Category node grouping `children` under `title`.
    pub fn category(title: impl Into<String>, collapsable: bool, children: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            target: None,
            collapsable,
            children,
        }
    }

    /// Titled leaf linking to `target`.
    pub fn link(title: impl Into<String>, target: NavPath) -> Self {
        Self {
            title: title.into(),
            target: Some(target),
            collapsable: false,
            children: Vec::new(),
        }
    }
}

/// Ordered sidebar for one top-level route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarSection(Vec<NavEntry>);

impl SidebarSection {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every route in the section, depth-first in display order.
    ///
    /// Includes bare routes at any depth and node link targets.
    pub fn routes(&self) -> Vec<&NavPath> {
        fn walk<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a NavPath>) {
            for entry in entries {
                match entry {
                    NavEntry::Route(route) => out.push(route),
                    NavEntry::Node(node) => {
                        out.extend(node.target.as_ref());
                        walk(&node.children, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.0, &mut out);
        out
    }

    /// First route that occurs more than once, if any.
    pub fn first_duplicate(&self) -> Option<&NavPath> {
        let mut seen = HashSet::new();
        self.routes().into_iter().find(|route| !seen.insert(*route))
    }
}

impl<'a> IntoIterator for &'a SidebarSection {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
