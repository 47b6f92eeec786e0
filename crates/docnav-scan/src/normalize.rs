//! Filesystem path to route conversion.

use std::path::{Component, Path};

use crate::error::ScanError;
use crate::route::NavPath;

/// Default markdown extension, without the dot.
pub const DEFAULT_EXTENSION: &str = "md";

/// Default index file stem. `x/README.md` becomes the route `x/`.
pub const DEFAULT_INDEX_NAME: &str = "README";

/// Converts markdown file paths into [`NavPath`] routes.
///
/// Pure and cheap to clone; holds only the extension and index file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathNormalizer {
    extension: String,
    index_name: String,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION, DEFAULT_INDEX_NAME)
    }
}

impl PathNormalizer {
    /// Create a normalizer for the given extension (without dot) and index stem.
    pub fn new(extension: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            index_name: index_name.into(),
        }
    }

    /// Markdown extension without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Index file stem.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Normalize `path` relative to `root`.
    ///
    /// Examples (root `docs/core`):
    /// - `docs/core/tutorials/first.md` -> `"tutorials/first"`
    /// - `docs/core/tutorials/etl/README.md` -> `"tutorials/etl/"`
    /// - `docs/core/README.md` -> `""`
    ///
    /// Separators are always `/`, whatever the platform. The index name must
    /// be the whole file stem, not a suffix: `guide/NOTREADME.md` stays
    /// `"guide/NOTREADME"`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPath`] if `path` is not strictly below `root`
    /// or climbs out of it through `..`.
    pub fn normalize(&self, path: &Path, root: &Path) -> Result<NavPath, ScanError> {
        let invalid = || ScanError::InvalidPath {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        };

        let rel = path.strip_prefix(root).map_err(|_| invalid())?;

        let mut segments = Vec::new();
        for component in rel.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_string_lossy()),
                Component::CurDir => {}
                _ => return Err(invalid()),
            }
        }
        let Some(last) = segments.pop() else {
            return Err(invalid());
        };

        let suffix = format!(".{}", self.extension);
        let stem = last.strip_suffix(suffix.as_str()).unwrap_or(&*last);

        let mut route = segments.join("/");
        if !route.is_empty() {
            route.push('/');
        }
        // Index files name their directory, so the route stops at the slash.
        if stem != self.index_name {
            route.push_str(stem);
        }

        Ok(NavPath::new(route))
    }
}
