use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    currency::PriceFormatter,
    errors::ConfigError,
    menu::tables::MenuTables,
    utils::paths::{self, ensure_dir, write_atomic},
};

pub const DEFAULT_SOURCE: &str = "base.json";
pub const DEFAULT_MOUNT_ID: &str = "app";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub source: String,
    pub mount_id: String,
    pub locale: String,
    pub currency: String,
    /// When false every section stays expanded and nothing is persisted.
    pub collapsible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub tables: MenuTables,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            mount_id: DEFAULT_MOUNT_ID.into(),
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            collapsible: true,
            title: None,
            tables: MenuTables::default(),
        }
    }
}

impl Config {
    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter::for_locale(&self.locale, &self.currency)
    }

    pub fn page_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Menu")
    }

    /// Applies `MENU_RENDER_SOURCE` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(source) = env::var("MENU_RENDER_SOURCE") {
            if !source.trim().is_empty() {
                self.source = source.trim().to_string();
            }
        }
        self
    }
}

/// Loads and saves [`Config`] under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn state_file(&self) -> PathBuf {
        paths::state_file_in(&self.base)
    }
}
