//! CLI command implementations.

mod check;
mod nav;
mod order;
mod resolve;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use order::OrderArgs;
pub(crate) use resolve::ResolveArgs;

use std::path::PathBuf;

use clap::Args;
use dstnav_catalog::{BuildOptions, Catalog, DocumentInventory, Routes, source};
use dstnav_config::{CliSettings, Config};

use crate::error::CliError;

/// Options shared by every command that builds the catalog.
#[derive(Args, Default)]
pub(crate) struct CatalogArgs {
    /// Path to configuration file (default: auto-discover dstnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebar definition file, repeatable (overrides config).
    #[arg(short = 'f', long = "sidebars", value_name = "FILE")]
    sidebar_files: Vec<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Route prefix of documentation pages (overrides config).
    #[arg(long)]
    route_base_path: Option<String>,

    /// Check every sidebar document against the source directory.
    #[arg(long)]
    check_inventory: bool,

    /// Skip the source directory check (overrides config).
    #[arg(long, conflicts_with = "check_inventory")]
    no_check_inventory: bool,

    /// Reject generated-index categories without documents.
    #[arg(long)]
    strict: bool,

    /// Allow generated-index categories without documents (overrides config).
    #[arg(long, conflicts_with = "strict")]
    no_strict: bool,
}

/// A validated catalog together with the settings it was built from.
pub(crate) struct LoadedCatalog {
    pub catalog: Catalog,
    pub routes: Routes,
    pub config: Config,
}

impl CatalogArgs {
    /// Build CLI settings from args. Unset flags leave config values alone.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source_dir: self.source_dir.clone(),
            sidebar_files: (!self.sidebar_files.is_empty()).then(|| self.sidebar_files.clone()),
            route_base_path: self.route_base_path.clone(),
            check_inventory: resolve_flag(self.check_inventory, self.no_check_inventory),
            strict_generated_index: resolve_flag(self.strict, self.no_strict),
        }
    }

    /// Load configuration, read sidebar files and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, load, inventory or validation error.
    pub(crate) fn load(&self) -> Result<LoadedCatalog, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;

        let sidebars = source::load_all(&config.sidebars_resolved.files)?;

        let inventory = if config.validation.check_inventory {
            Some(DocumentInventory::scan(&config.docs_resolved.source_dir)?)
        } else {
            None
        };
        let options = BuildOptions {
            inventory,
            strict_generated_index: config.validation.strict_generated_index,
        };

        let catalog = Catalog::build(&sidebars, &options)?;
        let routes = Routes::new(&config.docs_resolved.route_base_path);

        Ok(LoadedCatalog {
            catalog,
            routes,
            config,
        })
    }
}

/// Resolve an `--x`/`--no-x` flag pair. Neither flag leaves the config value.
fn resolve_flag(enable: bool, disable: bool) -> Option<bool> {
    disable.then_some(false).or(enable.then_some(true))
}

/// Fail with a readable message when `sidebar` is not in the catalog.
fn require_sidebar(catalog: &Catalog, sidebar: &str) -> Result<(), CliError> {
    if catalog.sidebar(sidebar).is_some() {
        return Ok(());
    }
    let known: Vec<_> = catalog.sidebar_names().collect();
    Err(CliError::Validation(format!(
        "unknown sidebar '{sidebar}' (available: {})",
        known.join(", ")
    )))
}
