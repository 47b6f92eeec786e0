//! Site navigation assembly for docnav.
//!
//! Combines product sidebars, versioned API sidebars, the navbar and
//! pass-through site metadata into one [`SiteManifest`].
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_site::{Navbar, SiteMetadata, SitePlan, build_site};
//!
//! let plan = SitePlan {
//!     content_root: "docs".into(),
//!     normalizer: Default::default(),
//!     metadata: SiteMetadata::default(),
//!     navbar: Navbar::default(),
//!     sidebars: Vec::new(),
//!     api: None,
//! };
//! let manifest = build_site(&plan)?;
//! let json = manifest.to_json()?;
//! # Ok(())
//! # }
//! ```

mod assembler;
mod metadata;
mod navbar;
mod site;
mod site_nav;

pub use assembler::{SiteAssembler, SiteManifest};
pub use metadata::SiteMetadata;
pub use navbar::{Navbar, NavbarItem, NavbarLink};
pub use site::{ApiPlan, SitePlan, build_site};
pub use site_nav::SiteNav;

pub use docnav_sidebar::{BuildError, ConfigurationError};
