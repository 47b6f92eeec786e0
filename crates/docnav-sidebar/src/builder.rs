//! Navigation tree builder.
//!
//! Combines author-specified category ordering with content discovery into a
//! [`SidebarSection`]. Top-level entries keep author order; dynamic categories
//! take their children from [`ContentScanner`], already sorted by route.
//!
//! # Collapse Defaults
//!
//! In a product line sidebar ([`NavigationTreeBuilder::build`]) the first
//! category is the introduction and is expanded by default; every later
//! category is collapsed. Reference sidebars
//! ([`NavigationTreeBuilder::build_reference`], used for API versions) have
//! no introduction, so every category is collapsed. An explicit `collapsable`
//! on the entry always wins.

use std::path::{Path, PathBuf};

use docnav_scan::{ContentScanner, PathNormalizer, ScanError, ScanWarning};
use rayon::prelude::*;

use crate::error::{BuildError, ConfigurationError};
use crate::model::{NavEntry, NavNode, SidebarSection};
use crate::spec::{CategorySpec, SidebarSpec};

/// A built sidebar together with the non-fatal warnings raised on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltSection {
    /// Route prefix the sidebar belongs to.
    pub route: String,
    /// Resolved sidebar.
    pub section: SidebarSection,
    /// Missing optional directories.
    pub warnings: Vec<ScanWarning>,
}

/// Builds sidebars from [`SidebarSpec`] values against one content root.
#[derive(Clone, Debug)]
pub struct NavigationTreeBuilder {
    content_root: PathBuf,
    normalizer: PathNormalizer,
}

impl NavigationTreeBuilder {
    /// Create a builder with the default markdown conventions.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self::with_normalizer(content_root, PathNormalizer::default())
    }

    /// Create a builder with custom extension and index file name.
    pub fn with_normalizer(content_root: impl Into<PathBuf>, normalizer: PathNormalizer) -> Self {
        Self {
            content_root: content_root.into(),
            normalizer,
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Build the product line sidebar described by `spec`.
    ///
    /// Dynamic categories scan in parallel; each scan sorts its own output,
    /// and the entries are collected back in author order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Scan`] for unreadable content and
    /// [`ConfigurationError::DuplicateRoute`] if a route occurs twice.
    pub fn build(&self, spec: &SidebarSpec) -> Result<BuiltSection, BuildError> {
        self.build_with(spec, true)
    }

    /// Build a reference sidebar: like [`build`](Self::build), but no
    /// category is expanded by default.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_reference(&self, spec: &SidebarSpec) -> Result<BuiltSection, BuildError> {
        self.build_with(spec, false)
    }

    fn build_with(
        &self,
        spec: &SidebarSpec,
        intro_expanded: bool,
    ) -> Result<BuiltSection, BuildError> {
        let scanner = ContentScanner::with_normalizer(
            self.content_root.join(&spec.dir),
            self.normalizer.clone(),
        )?;
        let intro = if intro_expanded {
            spec.entries.iter().position(CategorySpec::is_category)
        } else {
            None
        };

        let resolved = spec
            .entries
            .par_iter()
            .enumerate()
            .map(|(i, entry)| resolve_entry(&scanner, entry, intro != Some(i)))
            .collect::<Result<Vec<_>, ScanError>>()?;

        let mut entries = Vec::with_capacity(resolved.len());
        let mut warnings = Vec::new();
        for (entry, warning) in resolved {
            entries.push(entry);
            warnings.extend(warning);
        }

        let section = SidebarSection::new(entries);
        if let Some(route) = section.first_duplicate() {
            return Err(ConfigurationError::DuplicateRoute {
                section: spec.route.clone(),
                route: route.clone(),
            }
            .into());
        }

        tracing::debug!(
            route = %spec.route,
            entries = section.len(),
            warnings = warnings.len(),
            "Sidebar built"
        );

        Ok(BuiltSection {
            route: spec.route.clone(),
            section,
            warnings,
        })
    }
}

/// Resolve one entry. `collapsed_by_default` applies when the entry does not
/// set `collapsable` itself.
fn resolve_entry(
    scanner: &ContentScanner,
    entry: &CategorySpec,
    collapsed_by_default: bool,
) -> Result<(NavEntry, Option<ScanWarning>), ScanError> {
    let resolved = match entry {
        CategorySpec::Route { route } => (NavEntry::Route(route.clone()), None),
        CategorySpec::List {
            title,
            children,
            collapsable,
        } => {
            let children = children.iter().cloned().map(NavEntry::Route).collect();
            let node = NavNode::category(
                title.as_str(),
                collapsable.unwrap_or(collapsed_by_default),
                children,
            );
            (NavEntry::Node(node), None)
        }
        CategorySpec::Dynamic {
            title,
            dir,
            collapsable,
        } => {
            let output = scanner.scan(dir)?;
            let children = output.routes.into_iter().map(NavEntry::Route).collect();
            let node = NavNode::category(
                title.as_str(),
                collapsable.unwrap_or(collapsed_by_default),
                children,
            );
            (NavEntry::Node(node), output.warning)
        }
        CategorySpec::Link { title, target } => {
            (NavEntry::Node(NavNode::link(title.as_str(), target.clone())), None)
        }
    };
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use docnav_scan::NavPath;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Page").unwrap();
    }

    fn route(s: &str) -> NavEntry {
        NavEntry::Route(NavPath::new(s))
    }

    fn routes(children: &[&str]) -> Vec<NavPath> {
        children.iter().copied().map(NavPath::new).collect()
    }

    fn node(entry: &NavEntry) -> &NavNode {
        match entry {
            NavEntry::Node(node) => node,
            NavEntry::Route(route) => panic!("expected node, got route {route}"),
        }
    }

    fn core_spec() -> SidebarSpec {
        SidebarSpec {
            route: "/core/".to_owned(),
            dir: "core".to_owned(),
            entries: vec![
                CategorySpec::Route {
                    route: NavPath::new("/core/"),
                },
                CategorySpec::List {
                    title: "Welcome".to_owned(),
                    children: routes(&["welcome/why_prefect", "welcome/community"]),
                    collapsable: None,
                },
                CategorySpec::Dynamic {
                    title: "Tutorials".to_owned(),
                    dir: "tutorials".to_owned(),
                    collapsable: None,
                },
                CategorySpec::Dynamic {
                    title: "PINs".to_owned(),
                    dir: "PINs".to_owned(),
                    collapsable: None,
                },
            ],
        }
    }

    #[test]
    fn test_build_preserves_author_order_and_sorts_dynamic_children() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/tutorials/b/README.md");
        write(temp_dir.path(), "core/tutorials/a.md");

        let builder = NavigationTreeBuilder::new(temp_dir.path());
        let built = builder.build(&core_spec()).unwrap();

        assert_eq!(built.route, "/core/");
        let entries = built.section.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], route("/core/"));

        let welcome = node(&entries[1]);
        assert_eq!(welcome.title, "Welcome");
        assert_eq!(
            welcome.children,
            vec![route("welcome/why_prefect"), route("welcome/community")]
        );

        let tutorials = node(&entries[2]);
        assert_eq!(tutorials.title, "Tutorials");
        assert_eq!(
            tutorials.children,
            vec![route("tutorials/a"), route("tutorials/b/")]
        );
    }

    #[test]
    fn test_build_missing_optional_directory_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/tutorials/a.md");

        let builder = NavigationTreeBuilder::new(temp_dir.path());
        let built = builder.build(&core_spec()).unwrap();

        let pins = node(&built.section.entries()[3]);
        assert_eq!(pins.title, "PINs");
        assert!(pins.children.is_empty());
        assert_eq!(
            built.warnings,
            vec![ScanWarning::MissingDirectory(
                temp_dir.path().join("core").join("PINs")
            )]
        );
    }

    #[test]
    fn test_build_collapse_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();

        let builder = NavigationTreeBuilder::new(temp_dir.path());
        let built = builder.build(&core_spec()).unwrap();
        let entries = built.section.entries();

        // The introductory category is expanded, the rest collapse.
        assert!(!node(&entries[1]).collapsable);
        assert!(node(&entries[2]).collapsable);
        assert!(node(&entries[3]).collapsable);
    }

    #[test]
    fn test_build_explicit_collapsable_overrides_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let spec = SidebarSpec {
            route: "/cloud/".to_owned(),
            dir: "cloud".to_owned(),
            entries: vec![
                CategorySpec::List {
                    title: "Welcome".to_owned(),
                    children: routes(&["dataflow", "faq"]),
                    collapsable: Some(true),
                },
                CategorySpec::List {
                    title: "Tutorial".to_owned(),
                    children: routes(&["tutorial/configure", "tutorial/first"]),
                    collapsable: Some(false),
                },
            ],
        };

        let built = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap();
        let entries = built.section.entries();

        assert!(node(&entries[0]).collapsable);
        assert!(!node(&entries[1]).collapsable);
    }

    #[test]
    fn test_build_link_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let spec = SidebarSpec {
            route: "/api/unreleased/".to_owned(),
            dir: "api/unreleased".to_owned(),
            entries: vec![
                CategorySpec::Link {
                    title: "API Reference".to_owned(),
                    target: NavPath::new("/api/unreleased/"),
                },
                CategorySpec::Route {
                    route: NavPath::new("changelog"),
                },
                CategorySpec::Link {
                    title: "Test Coverage".to_owned(),
                    target: NavPath::new("https://codecov.io/gh/PrefectHQ/prefect"),
                },
            ],
        };

        let built = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap();
        let entries = built.section.entries();

        let link = node(&entries[0]);
        assert_eq!(link.title, "API Reference");
        assert_eq!(link.target, Some(NavPath::new("/api/unreleased/")));
        assert!(link.children.is_empty());
        assert_eq!(entries[1], route("changelog"));
    }

    #[test]
    fn test_build_rejects_duplicate_routes() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/examples/etl.md");
        let spec = SidebarSpec {
            route: "/core/".to_owned(),
            dir: "core".to_owned(),
            entries: vec![
                CategorySpec::List {
                    title: "Featured".to_owned(),
                    children: routes(&["examples/etl"]),
                    collapsable: None,
                },
                CategorySpec::Dynamic {
                    title: "Examples".to_owned(),
                    dir: "examples".to_owned(),
                    collapsable: None,
                },
            ],
        };

        let err = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap_err();

        assert!(
            matches!(
                err,
                BuildError::Configuration(ConfigurationError::DuplicateRoute { .. })
            ),
            "Expected DuplicateRoute, got {err:?}"
        );
        let msg = err.to_string();
        assert!(msg.contains("examples/etl"));
        assert!(msg.contains("/core/"));
    }

    #[test]
    fn test_build_category_title_does_not_affect_routes() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/tutorials/a.md");
        let mut spec = core_spec();
        let before = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap();

        if let CategorySpec::Dynamic { title, .. } = &mut spec.entries[2] {
            *title = "Walkthroughs".to_owned();
        }
        let after = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap();

        assert_eq!(before.section.routes(), after.section.routes());
        assert_eq!(node(&after.section.entries()[2]).title, "Walkthroughs");
    }

    #[test]
    fn test_build_reference_collapses_every_category() {
        let temp_dir = tempfile::tempdir().unwrap();

        let built = NavigationTreeBuilder::new(temp_dir.path())
            .build_reference(&core_spec())
            .unwrap();
        let entries = built.section.entries();

        assert!(node(&entries[1]).collapsable);
        assert!(node(&entries[2]).collapsable);
        assert!(node(&entries[3]).collapsable);
    }

    #[test]
    fn test_build_category_below_a_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/tutorials.md");
        let spec = SidebarSpec {
            route: "/core/".to_owned(),
            dir: "core".to_owned(),
            entries: vec![CategorySpec::Dynamic {
                title: "Tutorials".to_owned(),
                dir: "tutorials.md/advanced".to_owned(),
                collapsable: None,
            }],
        };

        let err = NavigationTreeBuilder::new(temp_dir.path())
            .build(&spec)
            .unwrap_err();

        assert!(
            matches!(err, BuildError::Scan(ScanError::Io { .. })),
            "Expected ScanError::Io, got {err:?}"
        );
        assert!(err.to_string().contains("tutorials.md"));
    }

    #[test]
    fn test_build_unreadable_category_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "core/tutorials");

        let err = NavigationTreeBuilder::new(temp_dir.path())
            .build(&core_spec())
            .unwrap_err();

        assert!(
            matches!(err, BuildError::Scan(ScanError::NotADirectory(_))),
            "Expected ScanError::NotADirectory, got {err:?}"
        );
    }
}
