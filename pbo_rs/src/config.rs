//! Site configuration file support.
//!
//! Loads `site.toml` from the project root, or an explicit path given on the
//! command line:
//!
//! ```toml
//! [site]
//! title = "Learn OOP"
//! tagline = "Master it"
//! base_url = "/"
//! ```

use std::path::{Path, PathBuf};

use homepage::SiteMeta;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// File looked up in the project root when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
}

/// `[site]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Shown as the hero heading and in the document title
    pub title: String,
    /// Shown under the hero heading
    pub tagline: String,
    /// Prefix for navigation links
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Belajar PBO".into(),
            tagline: "Pemrograman Berorientasi Objek dengan Java".into(),
            base_url: "/".into(),
        }
    }
}

impl SiteConfig {
    /// Load the configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, `root/site.toml`
    /// is used when present and the defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let path = root.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            warn!(
                "No {} in {}, using default site settings",
                DEFAULT_CONFIG_FILE,
                root.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Settings handed to the renderer.
    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta::new(self.site.title.as_str(), self.site.tagline.as_str())
            .with_base_url(self.site.base_url.as_str())
    }
}
