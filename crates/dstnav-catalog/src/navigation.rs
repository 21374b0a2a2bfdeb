//! Navigation tree for the page rendering layer.
//!
//! [`navigation`] turns a sidebar into a serializable tree with resolved
//! route hrefs, mirroring what the sidebar component renders.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Catalog, CategoryLink, category_link};
use crate::model::NavNode;
use crate::routes::Routes;

/// Rendered sidebar item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum NavItem {
    /// Link to a document.
    Link {
        label: String,
        href: String,
        doc_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        custom_props: Option<Value>,
    },
    /// Category with children.
    Category {
        label: String,
        /// Landing page route, if the category has one.
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        collapsed: bool,
        collapsible: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        items: Vec<NavItem>,
    },
    /// Raw markup.
    Html {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
}

/// Build the navigation tree of a sidebar.
///
/// Returns `None` if the sidebar does not exist.
#[must_use]
pub fn navigation(catalog: &Catalog, sidebar: &str, routes: &Routes) -> Option<Vec<NavItem>> {
    catalog
        .sidebar(sidebar)
        .map(|items| build_items(items, routes))
}

fn build_items(items: &[NavNode], routes: &Routes) -> Vec<NavItem> {
    items.iter().map(|node| build_item(node, routes)).collect()
}

fn build_item(node: &NavNode, routes: &Routes) -> NavItem {
    match node {
        NavNode::Doc(doc) => NavItem::Link {
            label: doc.display_label().to_owned(),
            href: routes.doc(&doc.id),
            doc_id: doc.id.clone(),
            class_name: doc.class_name.clone(),
            custom_props: doc.custom_props.clone(),
        },
        NavNode::Category(category) => NavItem::Category {
            label: category.label.clone(),
            href: category_link(category).map(|link| link_href(&link, routes)),
            collapsed: category.collapsed,
            collapsible: category.collapsible,
            class_name: category.class_name.clone(),
            items: build_items(&category.items, routes),
        },
        NavNode::Separator(separator) => NavItem::Html {
            value: separator.value.clone(),
            class_name: separator.class_name.clone(),
        },
    }
}

/// Route of a category link.
#[must_use]
pub fn link_href(link: &CategoryLink, routes: &Routes) -> String {
    match link {
        CategoryLink::Doc { id } => routes.doc(id),
        CategoryLink::GeneratedIndex { slug } => routes.generated_index(slug),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::catalog::BuildOptions;
    use crate::model::{Category, DocRef, GeneratedIndex, LandingPage, Separator};

    fn catalog(items: Vec<NavNode>) -> Catalog {
        Catalog::from_nodes(
            BTreeMap::from([("docs".to_owned(), items)]),
            &BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_navigation_unknown_sidebar() {
        assert!(navigation(&catalog(Vec::new()), "community", &Routes::default()).is_none());
    }

    #[test]
    fn test_navigation_tree_serializes_like_sidebar_items() {
        let core = Category::new(
            "Core Systems",
            vec![NavNode::Doc(
                DocRef::new("api-vanilla/core/entity-system").with_label("Entity System"),
            )],
        )
        .with_landing(LandingPage::GeneratedIndex(GeneratedIndex {
            title: "Core Systems".to_owned(),
            description: Some("Fundamental systems".to_owned()),
            slug: None,
        }));
        let divider = NavNode::Separator(Separator {
            value: "<hr/>".to_owned(),
            class_name: Some("sidebar-divider".to_owned()),
        });

        let nav = navigation(
            &catalog(vec![divider, NavNode::Category(core)]),
            "docs",
            &Routes::default(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&nav).unwrap(),
            json!([
                {"type": "html", "value": "<hr/>", "className": "sidebar-divider"},
                {
                    "type": "category",
                    "label": "Core Systems",
                    "href": "/docs/category/core-systems",
                    "collapsed": false,
                    "collapsible": true,
                    "items": [{
                        "type": "link",
                        "label": "Entity System",
                        "href": "/docs/api-vanilla/core/entity-system",
                        "docId": "api-vanilla/core/entity-system"
                    }]
                }
            ])
        );
    }

    #[test]
    fn test_category_with_doc_landing_links_to_doc() {
        let category = Category::new("Getting Started", vec![NavNode::doc("getting-started")])
            .with_landing(LandingPage::Doc(DocRef::new("getting-started")));

        let nav = navigation(
            &catalog(vec![NavNode::Category(category)]),
            "docs",
            &Routes::new("reference"),
        )
        .unwrap();

        let NavItem::Category { href, .. } = &nav[0] else {
            panic!("expected category, got {:?}", nav[0]);
        };
        assert_eq!(href.as_deref(), Some("/reference/getting-started"));
    }
}
