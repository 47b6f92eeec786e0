//! Markdown content discovery for docnav.
//!
//! This crate turns a content tree into canonical navigation routes:
//!
//! - [`PathNormalizer`] maps a markdown file path to a [`NavPath`]
//! - [`ContentScanner`] walks a subdirectory and returns its routes sorted
//!   by route string
//!
//! # Route Convention
//!
//! Routes never carry the content root, a leading slash or the markdown
//! extension. Index files (`README.md`) collapse into their directory and the
//! route keeps a trailing slash:
//!
//! - `tutorials/first.md` -> `"tutorials/first"`
//! - `tutorials/etl/README.md` -> `"tutorials/etl/"`
//! - `README.md` -> `""`
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), docnav_scan::ScanError> {
//! use docnav_scan::ContentScanner;
//!
//! let scanner = ContentScanner::new("docs/core")?;
//! let output = scanner.scan("tutorials")?;
//! for route in &output.routes {
//!     println!("{route}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod normalize;
mod route;
mod scanner;

pub use error::{ScanError, ScanWarning};
pub use normalize::{DEFAULT_EXTENSION, DEFAULT_INDEX_NAME, PathNormalizer};
pub use route::NavPath;
pub use scanner::{ContentScanner, ScanOutput};
