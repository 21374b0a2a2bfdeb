//! CLI error types.

use dstnav_catalog::{BuildError, InventoryError, LoadError};
use dstnav_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Inventory(#[from] InventoryError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
