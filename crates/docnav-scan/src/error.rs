//! Scan error and warning types.

use std::fmt;
use std::path::{Path, PathBuf};

/// Fatal failure while discovering content.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A discovered path does not lie under the content root.
    #[error("Path {} is not a document under {}", path.display(), root.display())]
    InvalidPath {
        /// Offending path.
        path: PathBuf,
        /// Expected content root.
        root: PathBuf,
    },
    /// Reading a directory failed for a reason other than absence.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Directory or entry being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The category path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// The configured markdown extension cannot form a file pattern.
    #[error("Invalid markdown extension {extension:?}: {source}")]
    Pattern {
        /// Configured extension.
        extension: String,
        /// Pattern compilation error.
        #[source]
        source: glob::PatternError,
    },
}

impl ScanError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Non-fatal scan condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanWarning {
    /// An optional category directory is absent; its child list is empty.
    MissingDirectory(PathBuf),
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory(path) => {
                write!(f, "Category directory not found: {}", path.display())
            }
        }
    }
}
