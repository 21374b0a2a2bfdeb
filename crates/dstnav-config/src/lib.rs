//! Configuration management for dstnav.
//!
//! Parses `dstnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `sidebars.files`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebar definition files.
    pub sidebar_files: Option<Vec<PathBuf>>,
    /// Override route base path.
    pub route_base_path: Option<String>,
    /// Override inventory check flag.
    pub check_inventory: Option<bool>,
    /// Override strict generated-index flag.
    pub strict_generated_index: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dstnav.toml";

/// Default sidebar definition file.
const DEFAULT_SIDEBARS_FILE: &str = "sidebars.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Sidebar sources (paths are relative strings from TOML).
    sidebars: SidebarsConfigRaw,
    /// Validation strictness.
    pub validation: ValidationConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved sidebar sources (set after loading).
    #[serde(skip)]
    pub sidebars_resolved: SidebarsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    route_base_path: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory scanned for the document inventory.
    pub source_dir: PathBuf,
    /// Route prefix of documentation pages.
    pub route_base_path: String,
}

/// Raw sidebar configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarsConfigRaw {
    files: Option<Vec<String>>,
}

/// Resolved sidebar sources with absolute paths.
#[derive(Debug, Default)]
pub struct SidebarsConfig {
    /// Sidebar definition files, merged in order.
    pub files: Vec<PathBuf>,
}

/// Validation strictness configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Check every sidebar document against the docs directory.
    pub check_inventory: bool,
    /// Reject generated-index categories with no documents.
    pub strict_generated_index: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dstnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(files) = &settings.sidebar_files {
            self.sidebars_resolved.files.clone_from(files);
        }
        if let Some(base) = &settings.route_base_path {
            self.docs_resolved.route_base_path.clone_from(base);
        }
        if let Some(check_inventory) = settings.check_inventory {
            self.validation.check_inventory = check_inventory;
        }
        if let Some(strict) = settings.strict_generated_index {
            self.validation.strict_generated_index = strict;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            sidebars: SidebarsConfigRaw::default(),
            validation: ValidationConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                route_base_path: "docs".to_owned(),
            },
            sidebars_resolved: SidebarsConfig {
                files: vec![base.join(DEFAULT_SIDEBARS_FILE)],
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_docs()?;
        self.validate_sidebars()?;
        Ok(())
    }

    /// Validate docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        let base = &self.docs_resolved.route_base_path;
        if base.is_empty() {
            return Err(ConfigError::Validation(
                "docs.route_base_path cannot be empty".to_owned(),
            ));
        }
        if base.starts_with('/') || base.ends_with('/') {
            return Err(ConfigError::Validation(
                "docs.route_base_path must not start or end with '/'".to_owned(),
            ));
        }
        if base.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "docs.route_base_path cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate sidebar sources.
    fn validate_sidebars(&self) -> Result<(), ConfigError> {
        if self.sidebars_resolved.files.is_empty() {
            return Err(ConfigError::Validation(
                "sidebars.files cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(dir, "docs.source_dir")?);
        }

        if let Some(ref mut files) = self.sidebars.files {
            for file in files.iter_mut() {
                *file = expand::expand_env(file, "sidebars.files")?;
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            route_base_path: self
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "docs".to_owned()),
        };

        self.sidebars_resolved = SidebarsConfig {
            files: match &self.sidebars.files {
                Some(files) => files.iter().map(|f| config_dir.join(f)).collect(),
                None => vec![config_dir.join(DEFAULT_SIDEBARS_FILE)],
            },
        };
    }
}
