use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Connection and input settings loaded from the TOML configuration file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    /// Path to the newline-delimited entity db id list.
    pub input_file: PathBuf,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}
