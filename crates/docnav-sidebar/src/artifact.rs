//! Frozen sidebar artifact decoding.
//!
//! A frozen artifact is a JSON (or YAML, for `.yaml`/`.yml` files) object
//! mapping a version identifier to its sidebar entries:
//!
//! ```json
//! { "0.7.3": ["/api/0.7.3/", "changelog", { "title": "prefect.core", "children": ["core/flow"] }] }
//! ```
//!
//! Older exports store the tree under a `sidebar` key instead; both are
//! accepted, the version key taking precedence. Keys must be unique.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};

use crate::error::ConfigurationError;
use crate::model::SidebarSection;

/// Key used by exports that do not name the version.
const LEGACY_KEY: &str = "sidebar";

/// Artifact object with keys in file order, duplicates rejected.
struct ArtifactMap(Vec<(String, SidebarSection)>);

impl<'de> Deserialize<'de> for ArtifactMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArtifactVisitor;

        impl<'de> Visitor<'de> for ArtifactVisitor {
            type Value = ArtifactMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from version identifier to sidebar entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, SidebarSection)> = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if entries.iter().any(|(existing, _)| *existing == key) {
                        return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
                    }
                    let section = map.next_value()?;
                    entries.push((key, section));
                }
                Ok(ArtifactMap(entries))
            }
        }

        deserializer.deserialize_map(ArtifactVisitor)
    }
}

/// Decode artifact content. `path` selects the format by extension.
fn decode(content: &str, path: &Path) -> Result<ArtifactMap, String> {
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}

/// Load the frozen sidebar of `version` from `path`.
///
/// # Errors
///
/// Returns [`ConfigurationError::ArtifactIo`] if the file cannot be read and
/// [`ConfigurationError::MalformedArtifact`] if it does not decode or holds
/// no sidebar for `version`.
pub(crate) fn load_frozen(version: &str, path: &Path) -> Result<SidebarSection, ConfigurationError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::ArtifactIo {
        version: version.to_owned(),
        path: path.to_path_buf(),
        source,
    })?;

    let malformed = |message: String| ConfigurationError::MalformedArtifact {
        version: version.to_owned(),
        path: path.to_path_buf(),
        message,
    };

    let ArtifactMap(mut entries) = decode(&content, path).map_err(&malformed)?;
    let lookup = |key: &str| entries.iter().position(|(k, _)| k == key);
    let index = lookup(version)
        .or_else(|| lookup(LEGACY_KEY))
        .ok_or_else(|| malformed(format!("no sidebar under key `{version}` or `{LEGACY_KEY}`")))?;

    Ok(entries.swap_remove(index).1)
}
