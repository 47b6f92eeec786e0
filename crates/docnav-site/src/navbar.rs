//! Top navigation bar.
//!
//! The navbar is authored independently of the sidebars and validated against
//! them at assembly time.

use serde::{Deserialize, Serialize};

/// A labelled navbar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarLink {
    /// Label shown in the navbar.
    pub text: String,
    /// Target route or external URL.
    pub link: String,
}

/// Navbar entry: a link or a dropdown of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavbarItem {
    Link(NavbarLink),
    Dropdown {
        /// Dropdown label.
        text: String,
        /// Links in display order.
        items: Vec<NavbarLink>,
    },
}

/// Ordered navbar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Navbar(Vec<NavbarItem>);

impl Navbar {
    pub fn new(items: Vec<NavbarItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[NavbarItem] {
        &self.0
    }

    /// Every link, dropdown items flattened in display order.
    pub fn links(&self) -> impl Iterator<Item = &NavbarLink> {
        self.0.iter().flat_map(|item| match item {
            NavbarItem::Link(link) => std::slice::from_ref(link),
            NavbarItem::Dropdown { items, .. } => items.as_slice(),
        })
    }
}

/// True for links leaving the site.
pub(crate) fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
