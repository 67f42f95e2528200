//! Optional `dvm.toml` defaults.
//!
//! Command-line arguments always win; the file only fills in values the user
//! did not pass.

use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

pub const CONFIG_FILE: &str = "dvm.toml";

/// Parsed `dvm.toml` contents.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// `[storage]` section: where snapshots are pushed.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StorageConfig {
    pub remote: Option<String>,
    pub url: Option<String>,
}

/// `[data]` section: which folder is under version tracking.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DataConfig {
    pub folder: Option<String>,
}

impl Config {
    /// Load `dvm.toml` from the given root. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self, AppError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve a value: explicit argument first, then the config file.
    pub fn resolve<'a>(
        arg: Option<&'a str>,
        fallback: Option<&'a str>,
        name: &'static str,
    ) -> Result<&'a str, AppError> {
        arg.or(fallback).ok_or(AppError::MissingSetting(name))
    }
}
