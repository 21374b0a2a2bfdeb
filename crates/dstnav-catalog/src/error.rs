//! Error types for catalog construction and sidebar loading.
//!
//! Every [`BuildError`] carries a [`NodePath`] naming the offending node, so
//! the surrounding build tool can print messages such as
//! `sidebar 'docs' → category 'Components' → duplicate document id 'combat'`.

use std::fmt;
use std::path::PathBuf;

/// One step of a [`NodePath`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// Named sidebar at the root of the catalog.
    Sidebar(String),
    /// Category, addressed by its label.
    Category(String),
    /// Positional item within a sidebar or category (zero-based).
    Item(usize),
    /// The landing page of the enclosing category.
    Landing,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sidebar(name) => write!(f, "sidebar '{name}'"),
            Self::Category(label) => write!(f, "category '{label}'"),
            Self::Item(index) => write!(f, "item {index}"),
            Self::Landing => f.write_str("landing page"),
        }
    }
}

/// Location of a node inside the raw sidebar definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    /// Path pointing at the root of a sidebar.
    #[must_use]
    pub fn sidebar(name: &str) -> Self {
        Self(vec![PathSegment::Sidebar(name.to_owned())])
    }

    /// Extend the path with one more segment.
    #[must_use]
    pub fn join(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    /// Path segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("catalog");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Validation failure while building a [`Catalog`](crate::Catalog).
///
/// Building is fail-fast: the first violation aborts and no partial catalog
/// is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Document placed at more than one navigation position.
    #[error("{path} → duplicate document id '{id}' (first placed at {first})")]
    DuplicateDocumentId {
        /// Repeated document id.
        id: String,
        /// Container of the second placement.
        path: NodePath,
        /// Container of the first placement.
        first: NodePath,
    },
    /// Category landing page pointing at a document that does not exist.
    #[error("{path} → landing page references missing document '{id}'")]
    DanglingLandingPageReference {
        /// Unresolved document id.
        id: String,
        /// Path of the category owning the landing page.
        path: NodePath,
    },
    /// Category that is collapsed but cannot be expanded by the reader.
    #[error("{path} → category '{label}' is collapsed but not collapsible")]
    InvalidCollapseState {
        /// Category label.
        label: String,
        /// Path of the category.
        path: NodePath,
    },
    /// Category with an empty or whitespace-only label.
    #[error("{path} → category label cannot be empty")]
    EmptyCategoryLabel {
        /// Path of the category.
        path: NodePath,
    },
    /// Node missing its `type` discriminator or a required field.
    #[error("{path} → malformed node: {reason}")]
    MalformedNode {
        /// Path of the node.
        path: NodePath,
        /// What is wrong with the node.
        reason: String,
    },
    /// Document absent from the supplied document inventory.
    #[error("{path} → document '{id}' does not exist in the docs directory")]
    UnknownDocument {
        /// Document id.
        id: String,
        /// Container of the placement.
        path: NodePath,
    },
    /// Generated-index category with no documents beneath it (strict mode only).
    #[error("{path} → generated index of category '{label}' contains no documents")]
    EmptyGeneratedIndex {
        /// Category label.
        label: String,
        /// Path of the category.
        path: NodePath,
    },
}

impl BuildError {
    /// Path of the node that caused the failure.
    #[must_use]
    pub fn path(&self) -> &NodePath {
        match self {
            Self::DuplicateDocumentId { path, .. }
            | Self::DanglingLandingPageReference { path, .. }
            | Self::InvalidCollapseState { path, .. }
            | Self::EmptyCategoryLabel { path }
            | Self::MalformedNode { path, .. }
            | Self::UnknownDocument { path, .. }
            | Self::EmptyGeneratedIndex { path, .. } => path,
        }
    }
}

/// Error returned when sidebar definition files cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error reading a definition file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File extension does not map to a known format.
    #[error("Unsupported sidebar file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Two definition files declare the same sidebar.
    #[error("Sidebar '{name}' is defined more than once (again in {})", path.display())]
    DuplicateSidebar {
        /// Sidebar name.
        name: String,
        /// File containing the second definition.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display_joins_segments() {
        let path = NodePath::sidebar("docs").join(PathSegment::Category("Components".to_owned()));

        assert_eq!(path.to_string(), "sidebar 'docs' → category 'Components'");
    }

    #[test]
    fn test_node_path_display_empty() {
        assert_eq!(NodePath::default().to_string(), "catalog");
    }

    #[test]
    fn test_duplicate_error_message_names_path() {
        let path = NodePath::sidebar("docs").join(PathSegment::Category("Components".to_owned()));
        let err = BuildError::DuplicateDocumentId {
            id: "combat".to_owned(),
            path: path.clone(),
            first: NodePath::sidebar("docs"),
        };

        assert!(
            err.to_string()
                .starts_with("sidebar 'docs' → category 'Components' → duplicate document id 'combat'")
        );
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_item_and_landing_segments() {
        let path = NodePath::sidebar("docs")
            .join(PathSegment::Item(2))
            .join(PathSegment::Landing);

        assert_eq!(path.to_string(), "sidebar 'docs' → item 2 → landing page");
        assert_eq!(path.segments().len(), 3);
    }
}
