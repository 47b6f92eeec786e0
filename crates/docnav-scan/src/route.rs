//! Canonical navigation route.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Route string derived from a content file location.
///
/// Ordering is plain byte-wise string comparison, so `"step10"` sorts before
/// `"step2"`. Serializes as a bare string.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavPath(String);

impl NavPath {
    /// Wrap a route string as-is.
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    /// Route as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for directory index routes (`""` or anything ending in `/`).
    pub fn is_index(&self) -> bool {
        self.0.is_empty() || self.0.ends_with('/')
    }

    /// Consume the route and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NavPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NavPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavPath {
    fn from(route: &str) -> Self {
        Self(route.to_owned())
    }
}

impl From<String> for NavPath {
    fn from(route: String) -> Self {
        Self(route)
    }
}
