//! `dstnav resolve` command implementation.

use clap::Args;
use dstnav_catalog::{BreadcrumbItem, DocLocation, DocRef, Placement, Routes, navigation};

use super::CatalogArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Document id (e.g. `api-vanilla/components/combat`) or route.
    document: String,

    #[command(flatten)]
    catalog: CatalogArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be built or the document is not
    /// part of any sidebar.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.catalog.load()?;
        let catalog = &loaded.catalog;

        // Accept routes as well as ids, e.g. from the redirect layer
        let id = if self.document.starts_with('/') {
            catalog.document_for_route(&loaded.routes, &self.document)
        } else {
            Some(self.document.as_str())
        };
        let Some((id, location)) = id.and_then(|id| catalog.resolve(id).map(|loc| (id, loc)))
        else {
            return Err(CliError::Validation(format!(
                "document '{}' is not part of any sidebar",
                self.document
            )));
        };

        output.highlight(id);
        output.field("route", &loaded.routes.doc(id));
        output.field("sidebar", &location.sidebar);
        output.field("position", &describe_position(location));

        let crumbs = catalog.breadcrumbs(id).unwrap_or_default();
        output.field("breadcrumbs", &describe_breadcrumbs(&crumbs, &loaded.routes));

        if let Some(neighbors) = catalog.neighbors(id) {
            let label = |doc: Option<&DocRef>| {
                doc.map_or_else(|| "-".to_owned(), |d| format!("{} ({})", d.display_label(), d.id))
            };
            output.field("previous", &label(neighbors.previous));
            output.field("next", &label(neighbors.next));
        }
        Ok(())
    }
}

/// Index path of the document, e.g. `2.1.0`, and how it is placed.
fn describe_position(location: &DocLocation) -> String {
    let indices: Vec<_> = location.indices.iter().map(ToString::to_string).collect();
    let placement = match location.placement {
        Placement::Item => "item",
        Placement::Landing => "category landing page",
    };
    format!("{} ({placement})", indices.join("."))
}

/// Ancestor labels joined root first, linked categories followed by their route.
fn describe_breadcrumbs(crumbs: &[BreadcrumbItem], routes: &Routes) -> String {
    if crumbs.is_empty() {
        return "-".to_owned();
    }
    crumbs
        .iter()
        .map(|crumb| match &crumb.link {
            Some(link) => format!("{} <{}>", crumb.label, navigation::link_href(link, routes)),
            None => crumb.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
