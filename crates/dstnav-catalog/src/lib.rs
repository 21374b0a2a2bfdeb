//! Sidebar navigation catalog for the DST scripting docs.
//!
//! This crate provides:
//! - [`Catalog`]: validated, immutable set of named sidebars
//! - Resolution of documents to their sidebar position, reading order for
//!   previous/next links and breadcrumbs
//! - Loading of sidebar definitions from JSON, YAML or TOML files
//! - A serializable navigation tree for the rendering layer
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use dstnav_catalog::{BuildOptions, Catalog, source};
//!
//! let raw = source::load_all(&[PathBuf::from("sidebars.yaml")])?;
//! let catalog = Catalog::build(&raw, &BuildOptions::default())?;
//!
//! // Previous/next links for a page
//! let neighbors = catalog.neighbors("api-vanilla/core/entity-system");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod model;
pub mod navigation;
pub mod raw;
pub mod routes;
pub mod source;

pub use catalog::{
    BreadcrumbItem, BuildOptions, Catalog, CategoryLink, DocLocation, Neighbors, Placement,
};
pub use error::{BuildError, LoadError, NodePath, PathSegment};
pub use inventory::{DocumentInventory, InventoryError};
pub use model::{Category, DocRef, GeneratedIndex, LandingPage, NavNode, Separator};
pub use navigation::NavItem;
pub use raw::{RawItem, RawLink, RawNode, RawSidebars};
pub use routes::Routes;
