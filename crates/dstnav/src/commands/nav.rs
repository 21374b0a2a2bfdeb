//! `dstnav nav` command implementation.

use clap::Args;
use dstnav_catalog::navigation;

use super::{CatalogArgs, require_sidebar};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Sidebar name.
    sidebar: String,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    catalog: CatalogArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be built or the sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.catalog.load()?;

        require_sidebar(&loaded.catalog, &self.sidebar)?;
        let items = navigation::navigation(&loaded.catalog, &self.sidebar, &loaded.routes)
            .unwrap_or_default();

        let json = if self.compact {
            serde_json::to_string(&items)?
        } else {
            serde_json::to_string_pretty(&items)?
        };
        output.data(&json);
        Ok(())
    }
}
