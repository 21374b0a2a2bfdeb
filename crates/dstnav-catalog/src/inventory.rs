//! Set of documents that physically exist in the docs directory.
//!
//! Document ids are source paths relative to the docs root, without the
//! `.md`/`.mdx` extension and with `/` separators. Hidden entries and
//! `_`-prefixed partials are skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Error scanning the docs directory.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Docs directory does not exist.
    #[error("Docs directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while walking the directory.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Entry being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Known document ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentInventory {
    ids: BTreeSet<String>,
}

impl DocumentInventory {
    /// Scan a docs directory recursively.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if `root` is not a directory and
    /// [`InventoryError::Io`] if any directory cannot be read.
    pub fn scan(root: &Path) -> Result<Self, InventoryError> {
        if !root.is_dir() {
            return Err(InventoryError::NotFound(root.to_path_buf()));
        }

        let mut inventory = Self::default();
        inventory.scan_directory(root, "")?;
        tracing::debug!(
            root = %root.display(),
            documents = inventory.len(),
            "Document inventory scanned"
        );
        Ok(inventory)
    }

    fn scan_directory(&mut self, dir: &Path, prefix: &str) -> Result<(), InventoryError> {
        let io_err = |source| InventoryError::Io {
            path: dir.to_path_buf(),
            source,
        };

        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                self.scan_directory(&path, &join_id(prefix, &name))?;
                continue;
            }

            let is_doc = path
                .extension()
                .is_some_and(|ext| DOC_EXTENSIONS.iter().any(|d| ext.eq_ignore_ascii_case(d)));
            if let (true, Some(stem)) = (is_doc, path.file_stem()) {
                self.insert(&join_id(prefix, &stem.to_string_lossy()));
            }
        }
        Ok(())
    }

    /// Add a document id.
    pub fn insert(&mut self, id: &str) {
        self.ids.insert(id.to_owned());
    }

    /// Whether the document exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no documents are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Document ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DocumentInventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Title\n").unwrap();
    }

    #[test]
    fn test_scan_collects_nested_documents() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "getting-started.md");
        write(temp.path(), "api-vanilla/core/entity-system.md");
        write(temp.path(), "api-vanilla/core/rpc-system.mdx");

        let inventory = DocumentInventory::scan(temp.path()).unwrap();

        assert_eq!(
            inventory.iter().collect::<Vec<_>>(),
            vec![
                "api-vanilla/core/entity-system",
                "api-vanilla/core/rpc-system",
                "getting-started",
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden_partials_and_other_files() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "intro.md");
        write(temp.path(), ".drafts/secret.md");
        write(temp.path(), "_snippet.md");
        write(temp.path(), "img/logo.png");

        let inventory = DocumentInventory::scan(temp.path()).unwrap();

        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec!["intro"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp = tempfile::tempdir().unwrap();

        let result = DocumentInventory::scan(&temp.path().join("docs"));

        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn test_from_iter_and_contains() {
        let inventory = DocumentInventory::from_iter(["intro", "install"]);

        assert!(inventory.contains("intro"));
        assert!(!inventory.contains("missing"));
        assert_eq!(inventory.len(), 2);
        assert!(!inventory.is_empty());
    }
}
