//! `dstnav order` command implementation.

use clap::Args;

use super::{CatalogArgs, require_sidebar};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the order command.
#[derive(Args)]
pub(crate) struct OrderArgs {
    /// Sidebar name.
    sidebar: String,

    /// Print the route of each document next to its id.
    #[arg(long)]
    routes: bool,

    #[command(flatten)]
    catalog: CatalogArgs,
}

impl OrderArgs {
    /// Execute the order command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be built or the sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.catalog.load()?;

        require_sidebar(&loaded.catalog, &self.sidebar)?;

        for doc in loaded.catalog.linear_order(&self.sidebar).unwrap_or_default() {
            if self.routes {
                output.data(&format!("{}\t{}", doc.id, loaded.routes.doc(&doc.id)));
            } else {
                output.data(&doc.id);
            }
        }
        Ok(())
    }
}
