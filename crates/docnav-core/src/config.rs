//! Configuration management for docnav.
//!
//! Configuration is a single TOML file. Every key has a default, so a missing
//! file (or a missing section) is fine; a malformed file is an error.
//!
//! ## File Location
//!
//! 1. `$DOCNAV_CONFIG_DIR/config.toml` when the variable is set
//! 2. otherwise the platform config directory, e.g. `~/.config/docnav/config.toml`
//!
//! `DOCNAV_DOCS_DIR` overrides `docs.root` after the file is loaded.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [docs]
//! root = "/srv/app/docs"
//! index_doc = "index"
//!
//! [search]
//! default_limit = 100
//!
//! [toc]
//! min_headings = 4
//!
//! [cache]
//! ttl_secs = 3600
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::page::PageOptions;
use crate::search::DEFAULT_LIMIT;
use crate::toc::{DEFAULT_MIN_HEADINGS, TocBuilder};
use crate::{Error, Result};

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV: &str = "DOCNAV_CONFIG_DIR";
/// Environment variable overriding `docs.root`.
pub const DOCS_DIR_ENV: &str = "DOCNAV_DOCS_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the documents live.
    pub docs: DocsConfig,
    /// Search behaviour.
    pub search: SearchConfig,
    /// Table of contents behaviour.
    pub toc: TocConfig,
    /// Response caching hints.
    pub cache: CacheConfig,
}

/// Document collection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory holding `<id>.md` files.
    pub root: PathBuf,
    /// Id of the landing document.
    pub index_doc: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            index_doc: "index".to_string(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match cap used when a request does not give one.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Table of contents settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Documents with fewer headings get no TOC.
    pub min_headings: usize,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_headings: DEFAULT_MIN_HEADINGS,
        }
    }
}

/// Caching hints handed to the response cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live for document and search responses, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => {
                debug!("no config directory available, using defaults");
                Self::default()
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            warn!("could not read config file {}: {e}", path.display());
            Error::Config(format!("Failed to read config: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            warn!("could not parse config file {}: {e}", path.display());
            Error::Config(format!("Failed to parse config: {e}"))
        })
    }

    /// Path of the config file, honouring `DOCNAV_CONFIG_DIR`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed).join(CONFIG_FILE));
            }
        }
        directories::ProjectDirs::from("dev", "docnav", "docnav")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Apply `DOCNAV_DOCS_DIR`.
    pub fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(DOCS_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                self.docs.root = PathBuf::from(trimmed);
            }
        }
    }

    /// Cache time-to-live as a duration.
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    /// Page assembly options derived from this configuration.
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            index_doc: self.docs.index_doc.clone(),
            toc: TocBuilder::with_min_headings(self.toc.min_headings),
        }
    }
}
