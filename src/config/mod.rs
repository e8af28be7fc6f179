//! Configuration management for checkblock.
//!
//! Settings come from two optional YAML files, merged field by field:
//! the global `~/.config/checkblock/config.yml`, then the project
//! `.checkblock/config.yml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::PROJECT_CONFIG;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/checkblock/config.yml)
    /// 2. Project config (.checkblock/config.yml)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(PROJECT_CONFIG))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Either file may be missing; missing files contribute nothing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;

        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/checkblock/config.yml
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/checkblock/config.yml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub store: Option<PartialStoreConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialStoreConfig {
    pub dir: Option<PathBuf>,
    pub extension: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_store = self.store.unwrap_or_default();
        let project_store = project.store.unwrap_or_default();

        Config {
            store: StoreConfig {
                // Project value > global value > default
                dir: project_store
                    .dir
                    .or(global_store.dir)
                    .unwrap_or_else(defaults::default_store_dir),
                extension: project_store
                    .extension
                    .or(global_store.extension)
                    .unwrap_or_else(defaults::default_extension),
            },
        }
    }
}
