//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering environment variables
//! over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: `--data <path>` (applied by the caller via [`CatalogConfig::with_data_path`]).
//! 2. **Environment variables**: `BOOK_CATALOG_DATA`.
//! 3. **Config file**: `--config <path>`, or `config.toml` in the OS config
//!    directory (via the `directories` crate). A missing file is skipped.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_path` | `data/sample_books.json` | JSON file holding the catalog |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "data/sample_books.json";
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file holding the catalog. Relative paths resolve against the working directory.
    #[config(env = "BOOK_CATALOG_DATA", default = "data/sample_books.json")]
    pub data_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the environment and `config_file`, falling
    /// back to defaults. A config file that does not exist is not an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file.filter(|p| p.exists()) {
            tracing::debug!(path = %path.display(), "reading config file");
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// `config.toml` inside the platform config directory, if one can be determined.
    pub fn default_config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "book-catalog", "book-catalog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }
}
