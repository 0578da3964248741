//! Service configuration
//!
//! Loaded from a YAML file. Every field has a default, so an empty file is valid.
//!
//! ```yaml
//! wordsDatabaseFilename: /usr/share/dict/scrabble.txt
//! server:
//!   bind: 0.0.0.0:8080
//! ```

use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Word list file; the embedded dictionary is used when absent
    #[serde(default)]
    pub words_database_filename: Option<PathBuf>,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    DEFAULT_BIND
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
}

impl Config {
    /// Read and parse a YAML config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse a config from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML or unknown fields.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, words: Option<PathBuf>, bind: Option<SocketAddr>) -> Self {
        if words.is_some() {
            self.words_database_filename = words;
        }
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        self
    }

    /// The word source this config points at
    #[must_use]
    pub fn word_source(&self) -> WordSource {
        WordSource::from_path(self.words_database_filename.clone())
    }
}
