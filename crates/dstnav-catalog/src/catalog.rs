//! Validated navigation catalog.
//!
//! A [`Catalog`] maps sidebar names to navigation trees and answers the
//! queries the page and redirect layers need: where a document sits
//! ([`Catalog::resolve`]), the reading order used for previous/next links
//! ([`Catalog::linear_order`], [`Catalog::neighbors`]) and the ancestor
//! categories shown as breadcrumbs ([`Catalog::breadcrumbs`]).
//!
//! # Lifecycle
//!
//! The catalog is built once from static definitions and never mutated
//! afterwards, so it can be shared between threads without locking.
//!
//! # Linear order
//!
//! Pre-order traversal of a sidebar. A category's landing document is
//! emitted immediately before its children; separators and generated-index
//! landing pages emit nothing. A document id is emitted at most once per
//! sidebar, at its first occurrence.
//!
//! A document that lands on a category and is also placed later in the same
//! sidebar, outside that category, keeps its landing position in the order.
//! Its previous/next links then follow the landing position while
//! [`Catalog::resolve`] and [`Catalog::breadcrumbs`] report the placement.
//! The build logs a warning for such documents.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::error::{BuildError, NodePath, PathSegment};
use crate::inventory::DocumentInventory;
use crate::model::{Category, DocRef, LandingPage, NavNode};
use crate::raw::{self, RawSidebars};
use crate::routes::{self, Routes};

/// Options controlling how strictly a catalog is validated.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Known documents. When set, every placed document must exist in it and
    /// landing pages may resolve through it.
    pub inventory: Option<DocumentInventory>,
    /// Reject generated-index categories with no documents beneath them.
    pub strict_generated_index: bool,
}

/// How a document is attached to the navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Placed as a document item.
    Item,
    /// Reachable only as a category landing page.
    Landing,
}

/// Position of a document within its sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocLocation {
    /// Owning sidebar.
    pub sidebar: String,
    /// Labels of the enclosing categories, root first.
    pub categories: Vec<String>,
    /// Index at each level, root first. For [`Placement::Landing`] the path
    /// ends at the category owning the landing page.
    pub indices: Vec<usize>,
    /// Whether the document is an item or only a landing page.
    pub placement: Placement,
}

/// Target of a category link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// Landing document id.
    Doc { id: String },
    /// Generated index slug.
    GeneratedIndex { slug: String },
}

/// Breadcrumb entry for an ancestor category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Category label.
    pub label: String,
    /// Category landing page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

/// Previous and next documents in reading order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbors<'a> {
    /// Document before this one, `None` at the start of the sidebar.
    pub previous: Option<&'a DocRef>,
    /// Document after this one, `None` at the end of the sidebar.
    pub next: Option<&'a DocRef>,
}

#[derive(Clone, Debug)]
struct Sidebar {
    items: Vec<NavNode>,
    order: Vec<DocRef>,
    positions: HashMap<String, usize>,
}

impl Sidebar {
    fn new(items: Vec<NavNode>) -> Self {
        let mut order = Vec::new();
        linearize(&items, &mut HashSet::new(), &mut order);
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.id.clone(), i))
            .collect();

        Self {
            items,
            order,
            positions,
        }
    }
}

fn linearize(items: &[NavNode], seen: &mut HashSet<String>, order: &mut Vec<DocRef>) {
    for node in items {
        match node {
            NavNode::Doc(doc) => emit_once(doc, seen, order),
            NavNode::Category(category) => {
                if let Some(doc) = category.landing_doc() {
                    emit_once(doc, seen, order);
                }
                linearize(&category.items, seen, order);
            }
            NavNode::Separator(_) => {}
        }
    }
}

fn emit_once(doc: &DocRef, seen: &mut HashSet<String>, order: &mut Vec<DocRef>) {
    if seen.insert(doc.id.clone()) {
        order.push(doc.clone());
    }
}

/// Validated, immutable set of named sidebars.
#[derive(Clone, Debug)]
pub struct Catalog {
    sidebars: BTreeMap<String, Sidebar>,
    locations: HashMap<String, DocLocation>,
}

impl Catalog {
    /// Build a catalog from raw sidebar definitions.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found. Structural problems are
    /// reported before semantic ones.
    pub fn build(sidebars: &RawSidebars, options: &BuildOptions) -> Result<Self, BuildError> {
        let nodes = raw::into_nodes(sidebars)?;
        Self::from_nodes(nodes, options)
    }

    /// Build a catalog from typed navigation trees.
    ///
    /// Sidebars are validated in name order and nodes in declaration order,
    /// so the reported error is deterministic.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found.
    pub fn from_nodes(
        sidebars: BTreeMap<String, Vec<NavNode>>,
        options: &BuildOptions,
    ) -> Result<Self, BuildError> {
        let mut validator = Validator::new(options);
        for (name, items) in &sidebars {
            tracing::debug!(sidebar = %name, items = items.len(), "Validating sidebar");
            let mut scope = Scope::default();
            validator.visit_items(name, items, &NodePath::sidebar(name), &mut scope)?;
        }
        let locations = validator.finish()?;

        let sidebars: BTreeMap<_, _> = sidebars
            .into_iter()
            .map(|(name, items)| (name, Sidebar::new(items)))
            .collect();

        tracing::info!(
            sidebars = sidebars.len(),
            documents = locations.len(),
            "Navigation catalog built"
        );

        Ok(Self {
            sidebars,
            locations,
        })
    }

    /// Sidebar names in sorted order.
    pub fn sidebar_names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Root items of a sidebar.
    #[must_use]
    pub fn sidebar(&self, name: &str) -> Option<&[NavNode]> {
        self.sidebars.get(name).map(|s| s.items.as_slice())
    }

    /// Number of documents reachable from any sidebar.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.locations.len()
    }

    /// Whether the document is reachable from any sidebar.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Locate a document.
    ///
    /// Returns `None` if no sidebar places the document or uses it as a
    /// landing page.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&DocLocation> {
        self.locations.get(id)
    }

    /// Name of the sidebar owning a document.
    #[must_use]
    pub fn sidebar_for(&self, id: &str) -> Option<&str> {
        self.resolve(id).map(|loc| loc.sidebar.as_str())
    }

    /// Documents of a sidebar in reading order.
    #[must_use]
    pub fn linear_order(&self, sidebar: &str) -> Option<&[DocRef]> {
        self.sidebars.get(sidebar).map(|s| s.order.as_slice())
    }

    /// Previous and next documents along the owning sidebar's reading order.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<Neighbors<'_>> {
        let location = self.resolve(id)?;
        let sidebar = self.sidebars.get(&location.sidebar)?;
        let &position = sidebar.positions.get(id)?;

        Some(Neighbors {
            previous: position
                .checked_sub(1)
                .and_then(|i| sidebar.order.get(i)),
            next: sidebar.order.get(position + 1),
        })
    }

    /// Ancestor categories of a document, root first.
    ///
    /// The document itself is not included. For a landing-only document the
    /// category it lands on is not included either.
    #[must_use]
    pub fn breadcrumbs(&self, id: &str) -> Option<Vec<BreadcrumbItem>> {
        let location = self.resolve(id)?;
        let mut items = self.sidebar(&location.sidebar)?;
        let ancestors = &location.indices[..location.indices.len().saturating_sub(1)];

        let mut breadcrumbs = Vec::with_capacity(ancestors.len());
        for &index in ancestors {
            let Some(NavNode::Category(category)) = items.get(index) else {
                return None;
            };
            breadcrumbs.push(BreadcrumbItem {
                label: category.label.clone(),
                link: category_link(category),
            });
            items = &category.items;
        }

        Some(breadcrumbs)
    }

    /// Document addressed by a route path, if it exists in the catalog.
    ///
    /// Used by the redirect layer to decide whether an old path still has a
    /// target. Accepts trailing slashes and `.html`/`.htm` extensions.
    #[must_use]
    pub fn document_for_route(&self, routes: &Routes, path: &str) -> Option<&str> {
        let id = routes.doc_id(path)?;
        self.locations.get_key_value(id).map(|(key, _)| key.as_str())
    }
}

/// Link target of a category, if it has a landing page.
pub(crate) fn category_link(category: &Category) -> Option<CategoryLink> {
    match &category.landing {
        Some(LandingPage::Doc(doc)) => Some(CategoryLink::Doc { id: doc.id.clone() }),
        Some(LandingPage::GeneratedIndex(index)) => Some(CategoryLink::GeneratedIndex {
            slug: routes::category_slug(index, &category.label),
        }),
        None => None,
    }
}

/// Enclosing categories of the node being visited.
#[derive(Default)]
struct Scope {
    labels: Vec<String>,
    indices: Vec<usize>,
}

struct PendingLanding {
    id: String,
    path: NodePath,
    location: DocLocation,
}

struct Validator<'a> {
    options: &'a BuildOptions,
    placements: HashMap<String, (DocLocation, NodePath)>,
    landings: Vec<PendingLanding>,
}

impl<'a> Validator<'a> {
    fn new(options: &'a BuildOptions) -> Self {
        Self {
            options,
            placements: HashMap::new(),
            landings: Vec::new(),
        }
    }

    fn visit_items(
        &mut self,
        sidebar: &str,
        items: &[NavNode],
        path: &NodePath,
        scope: &mut Scope,
    ) -> Result<(), BuildError> {
        for (index, node) in items.iter().enumerate() {
            scope.indices.push(index);
            match node {
                NavNode::Doc(doc) => self.place(sidebar, doc, path, scope)?,
                NavNode::Category(category) => {
                    self.visit_category(sidebar, category, path, scope)?;
                }
                NavNode::Separator(_) => {}
            }
            scope.indices.pop();
        }
        Ok(())
    }

    fn place(
        &mut self,
        sidebar: &str,
        doc: &DocRef,
        path: &NodePath,
        scope: &Scope,
    ) -> Result<(), BuildError> {
        if let Some(inventory) = &self.options.inventory
            && !inventory.contains(&doc.id)
        {
            return Err(BuildError::UnknownDocument {
                id: doc.id.clone(),
                path: path.clone(),
            });
        }

        if let Some((_, first)) = self.placements.get(&doc.id) {
            return Err(BuildError::DuplicateDocumentId {
                id: doc.id.clone(),
                path: path.clone(),
                first: first.clone(),
            });
        }

        let location = DocLocation {
            sidebar: sidebar.to_owned(),
            categories: scope.labels.clone(),
            indices: scope.indices.clone(),
            placement: Placement::Item,
        };
        self.placements
            .insert(doc.id.clone(), (location, path.clone()));
        Ok(())
    }

    fn visit_category(
        &mut self,
        sidebar: &str,
        category: &Category,
        path: &NodePath,
        scope: &mut Scope,
    ) -> Result<(), BuildError> {
        if category.label.trim().is_empty() {
            let index = scope.indices.last().copied().unwrap_or_default();
            return Err(BuildError::EmptyCategoryLabel {
                path: path.join(PathSegment::Item(index)),
            });
        }

        let category_path = path.join(PathSegment::Category(category.label.clone()));

        if category.collapsed && !category.collapsible {
            return Err(BuildError::InvalidCollapseState {
                label: category.label.clone(),
                path: category_path,
            });
        }

        match &category.landing {
            Some(LandingPage::Doc(doc)) => self.landings.push(PendingLanding {
                id: doc.id.clone(),
                path: category_path.join(PathSegment::Landing),
                location: DocLocation {
                    sidebar: sidebar.to_owned(),
                    categories: scope.labels.clone(),
                    indices: scope.indices.clone(),
                    placement: Placement::Landing,
                },
            }),
            Some(LandingPage::GeneratedIndex(_))
                if self.options.strict_generated_index && !has_documents(&category.items) =>
            {
                return Err(BuildError::EmptyGeneratedIndex {
                    label: category.label.clone(),
                    path: category_path,
                });
            }
            _ => {}
        }

        if category.items.is_empty() {
            tracing::warn!(path = %category_path, "Category has no items");
        }

        scope.labels.push(category.label.clone());
        self.visit_items(sidebar, &category.items, &category_path, scope)?;
        scope.labels.pop();
        Ok(())
    }

    /// Resolve pending landing pages and return all document locations.
    fn finish(self) -> Result<HashMap<String, DocLocation>, BuildError> {
        let mut locations: HashMap<String, DocLocation> = self
            .placements
            .into_iter()
            .map(|(id, (location, _))| (id, location))
            .collect();

        for landing in self.landings {
            if let Some(placed) = locations.get(&landing.id) {
                if is_placed_after(placed, &landing.location) {
                    tracing::warn!(
                        id = %landing.id,
                        path = %landing.path,
                        "Landing page is placed later in the sidebar, reading order follows the landing page"
                    );
                }
                continue;
            }
            let in_inventory = self
                .options
                .inventory
                .as_ref()
                .is_some_and(|inventory| inventory.contains(&landing.id));
            if !in_inventory {
                return Err(BuildError::DanglingLandingPageReference {
                    id: landing.id,
                    path: landing.path,
                });
            }
            tracing::warn!(
                id = %landing.id,
                path = %landing.path,
                "Landing page is not placed in any sidebar"
            );
            locations.insert(landing.id, landing.location);
        }

        Ok(locations)
    }
}

/// Whether `placed` comes after the landing category and outside its subtree.
fn is_placed_after(placed: &DocLocation, landing: &DocLocation) -> bool {
    placed.sidebar == landing.sidebar
        && placed.indices > landing.indices
        && !placed.indices.starts_with(&landing.indices)
}

/// Whether any document is reachable beneath the given items.
fn has_documents(items: &[NavNode]) -> bool {
    items.iter().any(|node| match node {
        NavNode::Doc(_) => true,
        NavNode::Category(category) => {
            category.landing_doc().is_some() || has_documents(&category.items)
        }
        NavNode::Separator(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::GeneratedIndex;

    static_assertions::assert_impl_all!(super::Catalog: Send, Sync);

    fn build(items: Vec<NavNode>) -> Result<Catalog, BuildError> {
        build_with(items, &BuildOptions::default())
    }

    fn build_with(items: Vec<NavNode>, options: &BuildOptions) -> Result<Catalog, BuildError> {
        Catalog::from_nodes(BTreeMap::from([("docs".to_owned(), items)]), options)
    }

    fn order_ids(catalog: &Catalog, sidebar: &str) -> Vec<String> {
        catalog
            .linear_order(sidebar)
            .unwrap()
            .iter()
            .map(|doc| doc.id.clone())
            .collect()
    }

    fn generated_index(title: &str) -> LandingPage {
        LandingPage::GeneratedIndex(GeneratedIndex {
            title: title.to_owned(),
            description: None,
            slug: None,
        })
    }

    #[test]
    fn test_category_children_in_order() {
        let catalog = build(vec![NavNode::category(
            "Getting Started",
            vec![NavNode::doc("intro"), NavNode::doc("install")],
        )])
        .unwrap();

        assert_eq!(order_ids(&catalog, "docs"), vec!["intro", "install"]);
    }

    #[test]
    fn test_duplicate_document_in_two_categories() {
        let err = build(vec![
            NavNode::category("A", vec![NavNode::doc("overview")]),
            NavNode::category("B", vec![NavNode::doc("overview")]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            BuildError::DuplicateDocumentId {
                id: "overview".to_owned(),
                path: NodePath::sidebar("docs").join(PathSegment::Category("B".to_owned())),
                first: NodePath::sidebar("docs").join(PathSegment::Category("A".to_owned())),
            }
        );
    }

    #[test]
    fn test_duplicate_document_across_sidebars() {
        let sidebars = BTreeMap::from([
            ("api".to_owned(), vec![NavNode::doc("overview")]),
            ("community".to_owned(), vec![NavNode::doc("overview")]),
        ]);

        let err = Catalog::from_nodes(sidebars, &BuildOptions::default()).unwrap_err();

        assert!(
            matches!(&err, BuildError::DuplicateDocumentId { id, .. } if id == "overview"),
            "got {err:?}"
        );
        assert_eq!(err.path(), &NodePath::sidebar("community"));
    }

    #[test]
    fn test_collapsed_but_not_collapsible_is_rejected() {
        let category = Category::new("Quick Start", vec![NavNode::doc("intro")])
            .with_collapse(false, true);

        let err = build(vec![NavNode::Category(category)]).unwrap_err();

        assert!(
            matches!(&err, BuildError::InvalidCollapseState { label, .. } if label == "Quick Start"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_valid_collapse_combinations() {
        for (collapsible, collapsed) in [(true, true), (true, false), (false, false)] {
            let category =
                Category::new("C", vec![NavNode::doc("a")]).with_collapse(collapsible, collapsed);
            assert!(build(vec![NavNode::Category(category)]).is_ok());
        }
    }

    #[test]
    fn test_missing_landing_document_is_dangling() {
        let category = Category::new("Core", vec![NavNode::doc("entity-system")])
            .with_landing(LandingPage::Doc(DocRef::new("missing-doc")));

        let err = build(vec![NavNode::Category(category)]).unwrap_err();

        assert_eq!(
            err,
            BuildError::DanglingLandingPageReference {
                id: "missing-doc".to_owned(),
                path: NodePath::sidebar("docs")
                    .join(PathSegment::Category("Core".to_owned()))
                    .join(PathSegment::Landing),
            }
        );
    }

    #[test]
    fn test_landing_placed_elsewhere_resolves() {
        let category = Category::new("Core", vec![NavNode::doc("entity-system")])
            .with_landing(LandingPage::Doc(DocRef::new("core-overview")));

        let catalog = build(vec![NavNode::doc("core-overview"), NavNode::Category(category)]).unwrap();

        assert_eq!(
            order_ids(&catalog, "docs"),
            vec!["core-overview", "entity-system"]
        );
        assert_eq!(catalog.resolve("core-overview").unwrap().placement, Placement::Item);
    }

    #[test]
    fn test_landing_resolves_through_inventory() {
        let category = Category::new("Getting Started", vec![NavNode::doc("intro")])
            .with_landing(LandingPage::Doc(DocRef::new("getting-started")));
        let options = BuildOptions {
            inventory: Some(DocumentInventory::from_iter(["getting-started", "intro"])),
            ..BuildOptions::default()
        };

        let catalog = build_with(vec![NavNode::Category(category)], &options).unwrap();

        let location = catalog.resolve("getting-started").unwrap();
        assert_eq!(location.placement, Placement::Landing);
        assert_eq!(location.indices, vec![0]);
        assert!(location.categories.is_empty());
        assert_eq!(order_ids(&catalog, "docs"), vec!["getting-started", "intro"]);
    }

    #[test]
    fn test_landing_before_children_and_not_repeated() {
        let category = Category::new("Core", vec![NavNode::doc("core"), NavNode::doc("entity")])
            .with_landing(LandingPage::Doc(DocRef::new("core")));

        let catalog = build(vec![NavNode::Category(category)]).unwrap();

        assert_eq!(order_ids(&catalog, "docs"), vec!["core", "entity"]);
    }

    #[test]
    fn test_unknown_document_with_inventory() {
        let options = BuildOptions {
            inventory: Some(DocumentInventory::from_iter(["intro"])),
            ..BuildOptions::default()
        };

        let err = build_with(
            vec![NavNode::doc("intro"), NavNode::doc("install")],
            &options,
        )
        .unwrap_err();

        assert!(
            matches!(&err, BuildError::UnknownDocument { id, .. } if id == "install"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_empty_category_label() {
        let err = build(vec![
            NavNode::doc("intro"),
            NavNode::category("   ", vec![NavNode::doc("a")]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            BuildError::EmptyCategoryLabel {
                path: NodePath::sidebar("docs").join(PathSegment::Item(1)),
            }
        );
    }

    #[test]
    fn test_landing_placed_later_keeps_landing_position() {
        let a = Category::new("A", vec![NavNode::doc("a1")])
            .with_landing(LandingPage::Doc(DocRef::new("x")));
        let b = Category::new(
            "B",
            vec![NavNode::doc("b1"), NavNode::doc("x"), NavNode::doc("b2")],
        );

        let catalog = build(vec![NavNode::Category(a), NavNode::Category(b)]).unwrap();

        assert_eq!(order_ids(&catalog, "docs"), vec!["x", "a1", "b1", "b2"]);
        let location = catalog.resolve("x").unwrap();
        assert_eq!(location.indices, vec![1, 1]);
        assert_eq!(location.placement, Placement::Item);
        let neighbors = catalog.neighbors("x").unwrap();
        assert_eq!(neighbors.previous, None);
        assert_eq!(neighbors.next.map(|d| d.id.as_str()), Some("a1"));
    }

    #[test]
    fn test_is_placed_after() {
        let location = |indices: Vec<usize>| DocLocation {
            sidebar: "docs".to_owned(),
            categories: Vec::new(),
            indices,
            placement: Placement::Item,
        };
        let landing = location(vec![0]);

        assert!(is_placed_after(&location(vec![1, 1]), &landing));
        assert!(!is_placed_after(&location(vec![0, 0]), &landing));
        assert!(!is_placed_after(&location(vec![2]), &location(vec![3])));
    }

    #[test]
    fn test_empty_sidebar_builds() {
        let catalog = build(Vec::new()).unwrap();

        assert_eq!(catalog.linear_order("docs"), Some(&[][..]));
        assert_eq!(catalog.document_count(), 0);
    }

    #[test]
    fn test_separators_and_generated_index_emit_nothing() {
        let core = Category::new("Core", vec![NavNode::doc("entity")])
            .with_landing(generated_index("Core"));

        let catalog = build(vec![
            NavNode::doc("intro"),
            NavNode::separator("<hr/>"),
            NavNode::Category(core),
        ])
        .unwrap();

        assert_eq!(order_ids(&catalog, "docs"), vec!["intro", "entity"]);
    }

    #[test]
    fn test_strict_generated_index_requires_documents() {
        let empty = Category::new(
            "Prefabs",
            vec![NavNode::separator("<hr/>"), NavNode::category("Nested", vec![])],
        )
        .with_landing(generated_index("Prefabs"));
        let options = BuildOptions {
            strict_generated_index: true,
            ..BuildOptions::default()
        };

        let lenient = build(vec![NavNode::Category(empty.clone())]);
        let strict = build_with(vec![NavNode::Category(empty)], &options);

        assert!(lenient.is_ok());
        assert!(
            matches!(strict, Err(BuildError::EmptyGeneratedIndex { ref label, .. }) if label == "Prefabs")
        );
    }

    #[test]
    fn test_strict_generated_index_accepts_nested_documents() {
        let category = Category::new(
            "Core",
            vec![NavNode::category("Entities", vec![NavNode::doc("entity")])],
        )
        .with_landing(generated_index("Core"));
        let options = BuildOptions {
            strict_generated_index: true,
            ..BuildOptions::default()
        };

        assert!(build_with(vec![NavNode::Category(category)], &options).is_ok());
    }

    #[test]
    fn test_resolve_returns_placement_path() {
        let catalog = build(vec![
            NavNode::doc("intro"),
            NavNode::category(
                "Core Systems",
                vec![
                    NavNode::separator("<hr/>"),
                    NavNode::category("Network", vec![NavNode::doc("rpc")]),
                ],
            ),
        ])
        .unwrap();

        assert_eq!(
            catalog.resolve("rpc"),
            Some(&DocLocation {
                sidebar: "docs".to_owned(),
                categories: vec!["Core Systems".to_owned(), "Network".to_owned()],
                indices: vec![1, 1, 0],
                placement: Placement::Item,
            })
        );
        assert_eq!(catalog.resolve("intro").unwrap().indices, vec![0]);
        assert!(catalog.resolve("missing").is_none());
    }

    #[test]
    fn test_neighbors_follow_linear_order() {
        let catalog = build(vec![
            NavNode::doc("a"),
            NavNode::category("C", vec![NavNode::doc("b"), NavNode::doc("c")]),
        ])
        .unwrap();

        let first = catalog.neighbors("a").unwrap();
        let middle = catalog.neighbors("b").unwrap();
        let last = catalog.neighbors("c").unwrap();

        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|d| d.id.as_str()), Some("b"));
        assert_eq!(middle.previous.map(|d| d.id.as_str()), Some("a"));
        assert_eq!(middle.next.map(|d| d.id.as_str()), Some("c"));
        assert!(last.next.is_none());
        assert!(catalog.neighbors("missing").is_none());
    }

    #[test]
    fn test_breadcrumbs_list_ancestor_categories() {
        let core = Category::new(
            "Core Systems",
            vec![NavNode::category("Network", vec![NavNode::doc("rpc")])],
        )
        .with_landing(generated_index("Core Systems"));

        let catalog = build(vec![NavNode::Category(core)]).unwrap();

        assert_eq!(
            catalog.breadcrumbs("rpc").unwrap(),
            vec![
                BreadcrumbItem {
                    label: "Core Systems".to_owned(),
                    link: Some(CategoryLink::GeneratedIndex {
                        slug: "core-systems".to_owned()
                    }),
                },
                BreadcrumbItem {
                    label: "Network".to_owned(),
                    link: None,
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_root_document_is_empty() {
        let catalog = build(vec![NavNode::doc("intro")]).unwrap();

        assert_eq!(catalog.breadcrumbs("intro"), Some(Vec::new()));
        assert!(catalog.breadcrumbs("missing").is_none());
    }

    #[test]
    fn test_sidebar_for_and_contains() {
        let sidebars = BTreeMap::from([
            ("docs".to_owned(), vec![NavNode::doc("intro")]),
            ("community".to_owned(), vec![NavNode::doc("code-of-conduct")]),
        ]);

        let catalog = Catalog::from_nodes(sidebars, &BuildOptions::default()).unwrap();

        assert_eq!(catalog.sidebar_for("code-of-conduct"), Some("community"));
        assert!(catalog.contains("intro"));
        assert!(!catalog.contains("missing"));
        assert_eq!(
            catalog.sidebar_names().collect::<Vec<_>>(),
            vec!["community", "docs"]
        );
    }

    #[test]
    fn test_document_for_route() {
        let catalog = build(vec![NavNode::doc("api-vanilla/core/entity-system")]).unwrap();
        let routes = Routes::default();

        assert_eq!(
            catalog.document_for_route(&routes, "/docs/api-vanilla/core/entity-system.html"),
            Some("api-vanilla/core/entity-system")
        );
        assert!(catalog.document_for_route(&routes, "/docs/removed").is_none());
    }
}
