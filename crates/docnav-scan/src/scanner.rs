//! Recursive markdown discovery.
//!
//! The scanner walks one category directory, keeps files whose name matches
//! `*.<extension>`, and normalizes each one against the content root. Walk
//! order is whatever the platform returns; the result is sorted afterwards so
//! output is identical everywhere.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{ScanError, ScanWarning};
use crate::normalize::PathNormalizer;
use crate::route::NavPath;

/// Dotfiles never match, mirroring shell glob semantics.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Result of scanning one category directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Discovered routes, strictly ascending.
    pub routes: Vec<NavPath>,
    /// Set when the directory was absent.
    pub warning: Option<ScanWarning>,
}

/// Discovers markdown documents below a content root.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), docnav_scan::ScanError> {
/// use docnav_scan::ContentScanner;
///
/// let scanner = ContentScanner::new("docs/core")?;
/// // ["tutorials/etl/", "tutorials/first", ...]
/// let routes = scanner.scan("tutorials")?.routes;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ContentScanner {
    root: PathBuf,
    normalizer: PathNormalizer,
    pattern: Pattern,
}

impl ContentScanner {
    /// Create a scanner with the default `.md` extension and `README` index name.
    ///
    /// # Errors
    ///
    /// Never fails for the defaults; returns [`ScanError::Pattern`] only for
    /// custom extensions via [`with_normalizer`](Self::with_normalizer).
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        Self::with_normalizer(root, PathNormalizer::default())
    }

    /// Create a scanner using a custom normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if the extension cannot form a file pattern.
    pub fn with_normalizer(
        root: impl Into<PathBuf>,
        normalizer: PathNormalizer,
    ) -> Result<Self, ScanError> {
        let extension = normalizer.extension();
        let pattern = Pattern::new(&format!("*.{}", Pattern::escape(extension))).map_err(
            |source| ScanError::Pattern {
                extension: extension.to_owned(),
                source,
            },
        )?;

        Ok(Self {
            root: root.into(),
            normalizer,
            pattern,
        })
    }

    /// Content root that routes are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan `root/subdir` recursively.
    ///
    /// Routes keep the subdirectory prefix (`"tutorials/first"`), are sorted
    /// ascending and contain no duplicates. An empty `subdir` scans the whole
    /// root.
    ///
    /// A missing directory is not an error: the output is empty and carries
    /// [`ScanWarning::MissingDirectory`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the path is not a directory or any directory
    /// below it cannot be read.
    pub fn scan(&self, subdir: &str) -> Result<ScanOutput, ScanError> {
        let dir = if subdir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(subdir)
        };

        match fs::metadata(&dir) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %dir.display(), "Category directory not found, leaving it empty");
                return Ok(ScanOutput {
                    routes: Vec::new(),
                    warning: Some(ScanWarning::MissingDirectory(dir)),
                });
            }
            Err(e) => return Err(ScanError::io(&dir, e)),
            Ok(meta) if !meta.is_dir() => return Err(ScanError::NotADirectory(dir)),
            Ok(_) => {}
        }

        let mut files = Vec::new();
        self.collect_files(&dir, &mut files)?;

        let mut routes = files
            .iter()
            .map(|path| self.normalizer.normalize(path, &self.root))
            .collect::<Result<Vec<_>, _>>()?;
        routes.sort_unstable();
        routes.dedup();

        tracing::debug!(dir = %dir.display(), route_count = routes.len(), "Scan completed");

        Ok(ScanOutput {
            routes,
            warning: None,
        })
    }

    /// Collect matching files below `dir`.
    ///
    /// Hidden entries are skipped. Symlinked directories are not followed;
    /// symlinked files are kept if they resolve to a regular file.
    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ScanError> {
        let entries = fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ScanError::io(dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| ScanError::io(&path, e))?;

            if file_type.is_dir() {
                self.collect_files(&path, files)?;
            } else if self.pattern.matches_with(&name, MATCH_OPTIONS)
                && (file_type.is_file() || fs::metadata(&path).is_ok_and(|m| m.is_file()))
            {
                files.push(path);
            }
        }

        Ok(())
    }
}
