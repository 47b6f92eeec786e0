//! Configuration management for docnav.
//!
//! Parses `docnav.toml` with serde and discovers the file in the current
//! directory or its parents. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ```toml
//! [site]
//! title = "Prefect Docs"
//!
//! [content]
//! root = "docs"
//!
//! [[navbar]]
//! text = "Prefect Core"
//! link = "/core/"
//!
//! [[sidebars]]
//! route = "/core/"
//! dir = "core"
//!
//! [[sidebars.entries]]
//! kind = "dynamic"
//! title = "Tutorials"
//! dir = "tutorials"
//!
//! [api]
//! route = "/api/"
//!
//! [[api.versions]]
//! id = "unreleased"
//! dir = "api/unreleased"
//!
//! [[api.versions]]
//! id = "0.7.3"
//! artifact = "sidebars/0.7.3.json"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.description`
//! - `content.root`
//! - `output.path`
//! - `api.versions.artifact`

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use docnav_sidebar::{CategorySpec, PathNormalizer, SidebarSpec, VersionSource, VersionSpec};
use docnav_site::{ApiPlan, Navbar, SiteMetadata, SitePlan};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the content root.
    pub content_root: Option<PathBuf>,
    /// Override the output file.
    pub output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata passed through to the manifest.
    pub site: SiteMetadata,
    /// Content tree settings (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Output settings (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Top navigation bar.
    pub navbar: Navbar,
    /// Product sidebars.
    pub sidebars: Vec<SidebarSpec>,
    /// Versioned API reference (optional section).
    api: Option<ApiConfigRaw>,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved output file (set after loading).
    #[serde(skip)]
    pub output_path: PathBuf,
    /// Resolved API versions (set after loading).
    #[serde(skip)]
    pub api_resolved: Option<ApiPlan>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    extension: Option<String>,
    index_name: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Root of the markdown tree.
    pub root: PathBuf,
    /// Project directory for docnav data (`.docnav/`).
    pub project_dir: PathBuf,
    /// Markdown extension without the dot.
    pub extension: String,
    /// Index file stem.
    pub index_name: String,
}

impl ContentConfig {
    #[must_use]
    pub fn normalizer(&self) -> PathNormalizer {
        PathNormalizer::new(self.extension.as_str(), self.index_name.as_str())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiConfigRaw {
    #[serde(default = "default_api_route")]
    route: String,
    #[serde(default)]
    versions: Vec<VersionConfigRaw>,
}

fn default_api_route() -> String {
    "/api/".to_owned()
}

/// One `[[api.versions]]` table: either `artifact` or `dir` (+ `entries`).
#[derive(Debug, Deserialize)]
struct VersionConfigRaw {
    id: String,
    artifact: Option<String>,
    dir: Option<String>,
    #[serde(default)]
    entries: Vec<CategorySpec>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., `site.title`).
        field: String,
        /// Error message (e.g., `${DOCS_TITLE} not set`).
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Route prefixes start and end with `/` (e.g., `/core/`).
fn require_route_prefix(route: &str, field: &str) -> Result<(), ConfigError> {
    if !route.starts_with('/') || !route.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start and end with '/', got '{route}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `docnav.toml` in the current directory and parents, falling back to
    /// defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_root) = &settings.content_root {
            self.content_resolved.root.clone_from(content_root);
        }
        if let Some(output) = &settings.output {
            self.output_path.clone_from(output);
        }
    }

    /// Build plan for this configuration.
    #[must_use]
    pub fn plan(&self) -> SitePlan {
        SitePlan {
            content_root: self.content_resolved.root.clone(),
            normalizer: self.content_resolved.normalizer(),
            metadata: self.site.clone(),
            navbar: self.navbar.clone(),
            sidebars: self.sidebars.clone(),
            api: self.api_resolved.clone(),
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Default config with paths relative to `base`.
    fn default_with_base(base: &Path) -> Self {
        let project_dir = base.join(".docnav");
        Self {
            site: SiteMetadata::default(),
            content: ContentConfigRaw::default(),
            output: OutputConfigRaw::default(),
            navbar: Navbar::default(),
            sidebars: Vec::new(),
            api: None,
            content_resolved: ContentConfig {
                root: base.join("docs"),
                project_dir: project_dir.clone(),
                extension: docnav_sidebar::DEFAULT_EXTENSION.to_owned(),
                index_name: docnav_sidebar::DEFAULT_INDEX_NAME.to_owned(),
            },
            output_path: project_dir.join("navigation.json"),
            api_resolved: None,
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.content_resolved.extension, "content.extension")?;
        if self.content_resolved.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "content.extension must not start with '.'".to_owned(),
            ));
        }
        require_non_empty(&self.content_resolved.index_name, "content.index_name")?;
        self.validate_navbar()?;
        self.validate_sidebars()?;
        self.validate_api()?;
        Ok(())
    }

    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for link in self.navbar.links() {
            require_non_empty(&link.text, "navbar.text")?;
            require_non_empty(&link.link, "navbar.link")?;
        }
        Ok(())
    }

    fn validate_sidebars(&self) -> Result<(), ConfigError> {
        let mut routes = HashSet::new();
        for sidebar in &self.sidebars {
            require_route_prefix(&sidebar.route, "sidebars.route")?;
            if !routes.insert(sidebar.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "sidebar {} is defined more than once",
                    sidebar.route
                )));
            }
        }
        Ok(())
    }

    fn validate_api(&self) -> Result<(), ConfigError> {
        let Some(api) = &self.api_resolved else {
            return Ok(());
        };
        require_route_prefix(&api.route, "api.route")?;
        for version in &api.versions {
            require_non_empty(&version.id, "api.versions.id")?;
            if version.id.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "api.versions.id must not contain '/', got '{}'",
                    version.id
                )));
            }
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.description = expand::expand_env(&self.site.description, "site.description")?;

        if let Some(ref root) = self.content.root {
            self.content.root = Some(expand::expand_env(root, "content.root")?);
        }
        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_env(path, "output.path")?);
        }

        if let Some(ref mut api) = self.api {
            for version in &mut api.versions {
                if let Some(ref artifact) = version.artifact {
                    version.artifact = Some(expand::expand_env(artifact, "api.versions.artifact")?);
                }
            }
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    ///
    /// Each `[[api.versions]]` table must set exactly one of `artifact` and
    /// `dir`.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let project_dir = config_dir.join(".docnav");

        self.content_resolved = ContentConfig {
            root: config_dir.join(self.content.root.as_deref().unwrap_or("docs")),
            project_dir: project_dir.clone(),
            extension: self
                .content
                .extension
                .clone()
                .unwrap_or_else(|| docnav_sidebar::DEFAULT_EXTENSION.to_owned()),
            index_name: self
                .content
                .index_name
                .clone()
                .unwrap_or_else(|| docnav_sidebar::DEFAULT_INDEX_NAME.to_owned()),
        };

        self.output_path = match &self.output.path {
            Some(path) => config_dir.join(path),
            None => project_dir.join("navigation.json"),
        };

        self.api_resolved = match &self.api {
            Some(api) => {
                let versions = api
                    .versions
                    .iter()
                    .map(|v| resolve_version(v, config_dir))
                    .collect::<Result<Vec<_>, _>>()?;
                Some(ApiPlan {
                    route: api.route.clone(),
                    versions,
                })
            }
            None => None,
        };

        Ok(())
    }
}

fn resolve_version(raw: &VersionConfigRaw, config_dir: &Path) -> Result<VersionSpec, ConfigError> {
    let source = match (&raw.artifact, &raw.dir) {
        (Some(artifact), None) => {
            if !raw.entries.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "api version {} loads a frozen artifact and cannot list entries",
                    raw.id
                )));
            }
            VersionSource::Frozen(config_dir.join(artifact))
        }
        (None, Some(dir)) => VersionSource::Live {
            dir: dir.clone(),
            entries: raw.entries.clone(),
        },
        _ => {
            return Err(ConfigError::Validation(format!(
                "api version {} must set exactly one of artifact or dir",
                raw.id
            )));
        }
    };
    Ok(VersionSpec {
        id: raw.id.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use docnav_site::NavbarItem;
    use pretty_assertions::assert_eq;

    use super::*;

    const PREFECT_TOML: &str = r#"
[site]
title = "Prefect Docs"
description = "Don't Panic."
head = [["link", { rel = "icon", href = "/favicon.ico" }]]

[site.theme]
repo = "PrefectHQ/prefect"
docsDir = "docs"

[content]
root = "docs"

[[navbar]]
text = "Prefect Core"
link = "/core/"

[[navbar]]
text = "API Reference"
items = [
    { text = "Unreleased", link = "/api/unreleased/" },
    { text = "0.7.3", link = "/api/0.7.3/" },
]

[[sidebars]]
route = "/core/"
dir = "core"

[[sidebars.entries]]
kind = "route"
route = "/core/"

[[sidebars.entries]]
kind = "list"
title = "Welcome"
children = ["welcome/why_prefect", "welcome/community"]

[[sidebars.entries]]
kind = "dynamic"
title = "Tutorials"
dir = "tutorials"
collapsable = true

[api]

[[api.versions]]
id = "unreleased"
dir = "api/unreleased"

[[api.versions.entries]]
kind = "link"
title = "Test Coverage"
target = "https://codecov.io/gh/PrefectHQ/prefect"

[[api.versions]]
id = "0.7.3"
artifact = "sidebars/0.7.3.json"
"#;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(result: Result<(), ConfigError>, expected_substrings: &[&str]) {
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    fn parse_and_resolve(toml: &str) -> Result<Config, ConfigError> {
        let mut config: Config = toml::from_str(toml)?;
        config.resolve_paths(Path::new("/project"))?;
        Ok(config)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.content_resolved.root, PathBuf::from("/test/docs"));
        assert_eq!(
            config.content_resolved.project_dir,
            PathBuf::from("/test/.docnav")
        );
        assert_eq!(
            config.output_path,
            PathBuf::from("/test/.docnav/navigation.json")
        );
        assert_eq!(config.content_resolved.normalizer(), PathNormalizer::default());
        assert!(config.sidebars.is_empty());
        assert!(config.api_resolved.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert!(config.navbar.items().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_resolve(PREFECT_TOML).unwrap();

        assert_eq!(config.site.title, "Prefect Docs");
        assert_eq!(config.site.head.len(), 1);
        assert_eq!(
            config.site.theme,
            Some(serde_json::json!({"repo": "PrefectHQ/prefect", "docsDir": "docs"}))
        );
        assert_eq!(config.navbar.items().len(), 2);
        assert!(matches!(config.navbar.items()[1], NavbarItem::Dropdown { .. }));

        let core = &config.sidebars[0];
        assert_eq!(core.route, "/core/");
        assert_eq!(core.entries.len(), 3);
        assert!(matches!(
            core.entries[2],
            CategorySpec::Dynamic { collapsable: Some(true), .. }
        ));
    }

    #[test]
    fn test_resolve_paths() {
        let config = parse_and_resolve(PREFECT_TOML).unwrap();

        assert_eq!(config.content_resolved.root, PathBuf::from("/project/docs"));
        assert_eq!(
            config.output_path,
            PathBuf::from("/project/.docnav/navigation.json")
        );

        let api = config.api_resolved.unwrap();
        assert_eq!(api.route, "/api/");
        assert_eq!(api.versions[0].id, "unreleased");
        assert!(matches!(
            api.versions[0].source,
            VersionSource::Live { ref dir, ref entries } if dir == "api/unreleased" && entries.len() == 1
        ));
        assert_eq!(
            api.versions[1].source,
            VersionSource::Frozen(PathBuf::from("/project/sidebars/0.7.3.json"))
        );
    }

    #[test]
    fn test_resolve_custom_content_settings() {
        let toml = r#"
[content]
root = "site"
extension = "markdown"
index_name = "index"

[output]
path = "public/nav.json"
"#;
        let config = parse_and_resolve(toml).unwrap();

        assert_eq!(config.content_resolved.root, PathBuf::from("/project/site"));
        assert_eq!(
            config.content_resolved.normalizer(),
            PathNormalizer::new("markdown", "index")
        );
        assert_eq!(config.output_path, PathBuf::from("/project/public/nav.json"));
    }

    #[test]
    fn test_version_requires_artifact_or_dir() {
        let toml = r#"
[[api.versions]]
id = "0.7.3"
"#;
        let result = parse_and_resolve(toml).map(|_| ());
        assert_validation_error(result, &["0.7.3", "exactly one of artifact or dir"]);
    }

    #[test]
    fn test_version_rejects_artifact_and_dir() {
        let toml = r#"
[[api.versions]]
id = "0.7.3"
artifact = "sidebars/0.7.3.json"
dir = "api/0.7.3"
"#;
        let result = parse_and_resolve(toml).map(|_| ());
        assert_validation_error(result, &["exactly one of artifact or dir"]);
    }

    #[test]
    fn test_frozen_version_rejects_entries() {
        let toml = r#"
[[api.versions]]
id = "0.7.3"
artifact = "sidebars/0.7.3.json"

[[api.versions.entries]]
kind = "route"
route = "changelog"
"#;
        let result = parse_and_resolve(toml).map(|_| ());
        assert_validation_error(result, &["0.7.3", "cannot list entries"]);
    }

    #[test]
    fn test_unknown_entry_kind_is_parse_error() {
        let toml = r#"
[[sidebars]]
route = "/core/"
dir = "core"

[[sidebars.entries]]
kind = "glob"
"#;
        let err = toml::from_str::<Config>(toml).unwrap_err();
        assert!(err.to_string().contains("glob"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            content_root: Some(PathBuf::from("/other/docs")),
            output: Some(PathBuf::from("/tmp/nav.json")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.content_resolved.root, PathBuf::from("/other/docs"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/nav.json"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.content_resolved.root, PathBuf::from("/test/docs"));
        assert_eq!(
            config.output_path,
            PathBuf::from("/test/.docnav/navigation.json")
        );
    }

    #[test]
    fn test_plan_carries_config() {
        let config = parse_and_resolve(PREFECT_TOML).unwrap();

        let plan = config.plan();

        assert_eq!(plan.content_root, PathBuf::from("/project/docs"));
        assert_eq!(plan.metadata.title, "Prefect Docs");
        assert_eq!(plan.sidebars.len(), 1);
        assert_eq!(plan.api.unwrap().versions.len(), 2);
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("DOCNAV_CFG_TITLE", "Staging Docs");
            std::env::set_var("DOCNAV_CFG_ROOT", "content");
        }

        let toml = r#"
[site]
title = "${DOCNAV_CFG_TITLE}"
description = "${DOCNAV_CFG_DESCRIPTION:-Don't Panic.}"

[content]
root = "${DOCNAV_CFG_ROOT}"

[[api.versions]]
id = "0.7.3"
artifact = "${DOCNAV_CFG_ARTIFACTS:-sidebars}/0.7.3.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(config.site.title, "Staging Docs");
        assert_eq!(config.site.description, "Don't Panic.");
        assert_eq!(config.content_resolved.root, PathBuf::from("/project/content"));
        assert_eq!(
            config.api_resolved.unwrap().versions[0].source,
            VersionSource::Frozen(PathBuf::from("/project/sidebars/0.7.3.json"))
        );

        unsafe {
            std::env::remove_var("DOCNAV_CFG_TITLE");
            std::env::remove_var("DOCNAV_CFG_ROOT");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("DOCNAV_CFG_MISSING_ROOT");
        }

        let toml = r#"
[content]
root = "${DOCNAV_CFG_MISSING_ROOT}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "content.root"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_full_config_passes() {
        let config = parse_and_resolve(PREFECT_TOML).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = String::new();
        assert_validation_error(config.validate(), &["site.title", "cannot be empty"]);
    }

    #[test]
    fn test_validate_extension_with_dot() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.content_resolved.extension = ".md".to_owned();
        assert_validation_error(config.validate(), &["content.extension"]);
    }

    #[test]
    fn test_validate_sidebar_route_shape() {
        let toml = r#"
[[sidebars]]
route = "core"
dir = "core"
"#;
        let config = parse_and_resolve(toml).unwrap();
        assert_validation_error(config.validate(), &["sidebars.route", "core"]);
    }

    #[test]
    fn test_validate_duplicate_sidebar() {
        let toml = r#"
[[sidebars]]
route = "/core/"
dir = "core"

[[sidebars]]
route = "/core/"
dir = "core-next"
"#;
        let config = parse_and_resolve(toml).unwrap();
        assert_validation_error(config.validate(), &["/core/", "more than once"]);
    }

    #[test]
    fn test_validate_version_id_with_slash() {
        let toml = r#"
[[api.versions]]
id = "0.7/3"
artifact = "sidebars/0.7.3.json"
"#;
        let config = parse_and_resolve(toml).unwrap();
        assert_validation_error(config.validate(), &["api.versions.id", "0.7/3"]);
    }

    #[test]
    fn test_validate_empty_navbar_link() {
        let toml = r#"
[[navbar]]
text = "Prefect Core"
link = ""
"#;
        let config = parse_and_resolve(toml).unwrap();
        assert_validation_error(config.validate(), &["navbar.link"]);
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(missing.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_load_from_file_resolves_against_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), PREFECT_TOML);

        let settings = CliSettings {
            output: Some(PathBuf::from("/tmp/out.json")),
            ..Default::default()
        };
        let config = Config::load(Some(path.as_path()), Some(&settings)).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.content_resolved.root, temp_dir.path().join("docs"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[site\ntitle = ");

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }
}
