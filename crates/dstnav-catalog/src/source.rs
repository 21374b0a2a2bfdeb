//! Loading sidebar definitions from files.
//!
//! The format is chosen by file extension: `.json`, `.yaml`/`.yml` or
//! `.toml`. Each file maps sidebar names to item lists. Several files can be
//! merged into one set of definitions as long as sidebar names do not clash.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::raw::RawSidebars;

/// Serialization format of a sidebar definition file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse sidebar definitions from a string.
///
/// # Errors
///
/// Returns the parser error of the given format.
pub fn parse_sidebars(content: &str, format: SourceFormat) -> Result<RawSidebars, LoadError> {
    let sidebars = match format {
        SourceFormat::Json => serde_json::from_str(content)?,
        SourceFormat::Yaml => {
            if content.trim().is_empty() {
                RawSidebars::new()
            } else {
                serde_yaml::from_str(content)?
            }
        }
        SourceFormat::Toml => toml::from_str(content)?,
    };
    Ok(sidebars)
}

/// Load sidebar definitions from one file.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedFormat`] for unknown extensions,
/// [`LoadError::Io`] if the file cannot be read, or a parse error.
pub fn load_sidebars(path: &Path) -> Result<RawSidebars, LoadError> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sidebars = parse_sidebars(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        sidebars = sidebars.len(),
        "Loaded sidebar definitions"
    );
    Ok(sidebars)
}

/// Load and merge sidebar definitions from several files.
///
/// # Errors
///
/// Returns [`LoadError::DuplicateSidebar`] if two files define the same
/// sidebar, or the first load error.
pub fn load_all(paths: &[PathBuf]) -> Result<RawSidebars, LoadError> {
    let mut merged = RawSidebars::new();
    for path in paths {
        for (name, items) in load_sidebars(path)? {
            if merged.contains_key(&name) {
                return Err(LoadError::DuplicateSidebar {
                    name,
                    path: path.clone(),
                });
            }
            merged.insert(name, items);
        }
    }
    Ok(merged)
}
