//! Validated navigation node types.
//!
//! These are the typed counterparts of the raw sidebar items in
//! [`raw`](crate::raw). A [`Catalog`](crate::Catalog) owns a tree of
//! [`NavNode`] values per sidebar.

use serde_json::Value;

/// Navigation tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum NavNode {
    /// Leaf pointing at one document.
    Doc(DocRef),
    /// Labelled group of child nodes.
    Category(Category),
    /// Raw markup rendered between items (dividers, headings).
    Separator(Separator),
}

impl NavNode {
    /// Shorthand for a document leaf without a label override.
    #[must_use]
    pub fn doc(id: &str) -> Self {
        Self::Doc(DocRef::new(id))
    }

    /// Shorthand for an expanded, collapsible category without landing page.
    #[must_use]
    pub fn category(label: &str, items: Vec<NavNode>) -> Self {
        Self::Category(Category::new(label, items))
    }

    /// Shorthand for a separator.
    #[must_use]
    pub fn separator(value: &str) -> Self {
        Self::Separator(Separator {
            value: value.to_owned(),
            class_name: None,
        })
    }
}

/// Reference to one addressable document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocRef {
    /// Document id (path of the source file without extension).
    pub id: String,
    /// Display label override.
    pub label: Option<String>,
    /// CSS class applied to the rendered item.
    pub class_name: Option<String>,
    /// Opaque properties passed through to the rendering layer.
    pub custom_props: Option<Value>,
}

impl DocRef {
    /// Create a reference with no overrides.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: None,
            class_name: None,
            custom_props: None,
        }
    }

    /// Set the display label override.
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// Label shown in navigation.
    ///
    /// Falls back to the last segment of the document id.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match &self.label {
            Some(label) => label,
            None => self.id.rsplit('/').next().unwrap_or(&self.id),
        }
    }
}

/// Page shown when the category itself is selected.
#[derive(Clone, Debug, PartialEq)]
pub enum LandingPage {
    /// An existing document.
    Doc(DocRef),
    /// Auto-generated index listing the category's children.
    GeneratedIndex(GeneratedIndex),
}

/// Descriptor of an auto-generated category index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIndex {
    /// Page title.
    pub title: String,
    /// Text shown under the title.
    pub description: Option<String>,
    /// Route slug. Derived from the category label when absent.
    pub slug: Option<String>,
}

/// Labelled group of navigation nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    /// Display label. Must not be blank.
    pub label: String,
    /// Optional landing page.
    pub landing: Option<LandingPage>,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Whether the reader can toggle the category.
    pub collapsible: bool,
    /// CSS class applied to the rendered category.
    pub class_name: Option<String>,
    /// Child nodes in display order.
    pub items: Vec<NavNode>,
}

impl Category {
    /// Create an expanded, collapsible category.
    #[must_use]
    pub fn new(label: &str, items: Vec<NavNode>) -> Self {
        Self {
            label: label.to_owned(),
            landing: None,
            collapsed: false,
            collapsible: true,
            class_name: None,
            items,
        }
    }

    /// Attach a landing page.
    #[must_use]
    pub fn with_landing(mut self, landing: LandingPage) -> Self {
        self.landing = Some(landing);
        self
    }

    /// Set collapse flags.
    #[must_use]
    pub fn with_collapse(mut self, collapsible: bool, collapsed: bool) -> Self {
        self.collapsible = collapsible;
        self.collapsed = collapsed;
        self
    }

    /// Landing document, if the landing page is a document.
    #[must_use]
    pub fn landing_doc(&self) -> Option<&DocRef> {
        match &self.landing {
            Some(LandingPage::Doc(doc)) => Some(doc),
            _ => None,
        }
    }
}

/// Raw markup between items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separator {
    /// Markup, rendered verbatim by the page layer.
    pub value: String,
    /// CSS class applied to the wrapper element.
    pub class_name: Option<String>,
}
