//! Route prefix to sidebar mapping.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use docnav_sidebar::{ConfigurationError, SidebarSection};
use serde::Serialize;

/// Sidebars keyed by top-level route prefix.
///
/// Keys are kept sorted, so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SiteNav(BTreeMap<String, SidebarSection>);

impl SiteNav {
    /// Register `section` under `route`.
    pub(crate) fn insert(
        &mut self,
        route: String,
        section: SidebarSection,
    ) -> Result<(), ConfigurationError> {
        match self.0.entry(route) {
            Entry::Occupied(entry) => Err(ConfigurationError::DuplicateSection(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(section);
                Ok(())
            }
        }
    }

    pub fn get(&self, route: &str) -> Option<&SidebarSection> {
        self.0.get(route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarSection)> {
        self.0.iter().map(|(route, section)| (route.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if some registered prefix covers `link` (`/cloud/` covers `/cloud/faq`).
    pub fn covers(&self, link: &str) -> bool {
        self.0.keys().any(|route| link.starts_with(route.as_str()))
    }
}
