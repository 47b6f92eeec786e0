//! Static site metadata.
//!
//! Everything except `title` and `description` is opaque to docnav and is
//! copied into the manifest unchanged for the renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site-wide metadata passed through to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Favicon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Extra `<head>` tags, renderer-specific.
    pub head: Vec<Value>,
    /// Markdown extension registrations, renderer-specific.
    pub markdown: Vec<Value>,
    /// Integration plugin configuration (analytics, search, ...).
    pub plugins: Vec<Value>,
    /// Theme options (repository, logo, edit links, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Value>,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            icon: None,
            head: Vec::new(),
            markdown: Vec::new(),
            plugins: Vec::new(),
            theme: None,
        }
    }
}
