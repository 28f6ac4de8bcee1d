//! Site configuration.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! title: Someone's site
//! origin: https://someone.dev
//! storage_key: colorScheme
//! selector_label: "Theme:"
//! pages:
//!   - { url: "", title: Home }
//!   - { url: projects/, title: Projects }
//!   - { url: "https://github.com/someone", title: GitHub }
//! ```
//!
//! Every field is optional; see [`SiteConfig`] for defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::nav::{NavBar, NavLink};
use crate::selector::DEFAULT_LABEL;

/// Default storage key for the persisted override.
pub const DEFAULT_STORAGE_KEY: &str = "colorScheme";

/// Default origin used to scope stored preferences.
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Error returned when configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Static configuration for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub origin: String,
    pub storage_key: String,
    pub selector_label: String,
    pub pages: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            origin: DEFAULT_ORIGIN.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            selector_label: DEFAULT_LABEL.to_string(),
            pages: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Reads and validates a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), pages = config.pages.len(), "loaded site config");
        Ok(config)
    }

    /// Parses and validates YAML config text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if let Some((index, _)) = self
            .pages
            .iter()
            .enumerate()
            .find(|(_, page)| page.title.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "page {} has an empty title",
                index + 1
            )));
        }
        Ok(())
    }

    /// The navigation bar for the configured pages.
    pub fn nav_bar(&self) -> NavBar {
        NavBar::new(self.pages.clone())
    }
}
