//! Route paths for documents and generated category indexes.

use crate::model::GeneratedIndex;

/// Default route prefix of the docs plugin.
pub const DEFAULT_BASE_PATH: &str = "docs";

/// Extensions stripped from incoming paths before lookup.
const LEGACY_EXTENSIONS: [&str; 2] = [".html", ".htm"];

/// Maps document ids to route paths and back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    base_path: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl Routes {
    /// Create routes under the given base path (slashes at either end are ignored).
    #[must_use]
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_matches('/').to_owned(),
        }
    }

    /// Route prefix without slashes.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Route of a document, e.g. `/docs/api-vanilla/core/entity-system`.
    #[must_use]
    pub fn doc(&self, id: &str) -> String {
        if self.base_path.is_empty() {
            format!("/{id}")
        } else {
            format!("/{}/{id}", self.base_path)
        }
    }

    /// Route of a generated category index, e.g. `/docs/category/core-systems`.
    #[must_use]
    pub fn generated_index(&self, slug: &str) -> String {
        self.doc(&format!("category/{slug}"))
    }

    /// Document id addressed by a route path.
    ///
    /// Returns `None` if the path is outside the base path or empty.
    #[must_use]
    pub fn doc_id<'a>(&self, path: &'a str) -> Option<&'a str> {
        let mut rest = path.trim_matches('/');
        if !self.base_path.is_empty() {
            rest = rest.strip_prefix(self.base_path.as_str())?;
            rest = rest.strip_prefix('/')?;
        }
        for ext in LEGACY_EXTENSIONS {
            if let Some(stripped) = rest.strip_suffix(ext) {
                rest = stripped;
                break;
            }
        }
        (!rest.is_empty()).then_some(rest)
    }
}

/// Slug of a generated index, derived from the category label when not set.
#[must_use]
pub fn category_slug(index: &GeneratedIndex, label: &str) -> String {
    match &index.slug {
        Some(slug) => slug.trim_matches('/').to_owned(),
        None => slugify(label),
    }
}

/// Kebab-case a label: lowercase alphanumerics joined by single dashes.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
