//! `dstnav check` command implementation.

use clap::Args;

use super::CatalogArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first error that prevents the catalog from being built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let loaded = self.catalog.load()?;
        let catalog = &loaded.catalog;

        for file in &loaded.config.sidebars_resolved.files {
            output.info(&format!("Sidebars: {}", file.display()));
        }
        if loaded.config.validation.check_inventory {
            output.info(&format!(
                "Inventory: {}",
                loaded.config.docs_resolved.source_dir.display()
            ));
        }

        for name in catalog.sidebar_names() {
            let count = catalog.linear_order(name).map_or(0, <[_]>::len);
            if count == 0 {
                output.warning(&format!("  {name}: no documents"));
            } else {
                output.info(&format!("  {name}: {count} documents"));
            }
        }

        output.success(&format!(
            "Catalog is valid: {} sidebars, {} documents",
            catalog.sidebar_names().count(),
            catalog.document_count()
        ));
        Ok(())
    }
}
