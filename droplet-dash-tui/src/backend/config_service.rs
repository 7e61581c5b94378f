//! Configuration service

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use droplet_dash_core::services::DEFAULT_PER_PAGE;
use droplet_dash_core::{Column, default_columns};
use droplet_dash_provider::mask_token;

use crate::view::theme::Theme;

const APP_DIR: &str = "droplet-dash";
const CONFIG_FILE: &str = "config.json";

/// Environment variables checked for an API token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["DIGITALOCEAN_TOKEN", "DO_API_TOKEN"];

/// Application configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// DigitalOcean API token.
    pub api_key: Option<String>,
    /// Panel title.
    pub title: String,
    /// Column names in display order; empty means the default set.
    pub columns: Vec<String>,
    /// Droplets requested per page.
    pub per_page: u32,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            title: "DigitalOcean".to_string(),
            columns: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
            theme: Theme::Dark,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_token))
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("per_page", &self.per_page)
            .field("theme", &self.theme)
            .finish()
    }
}

impl AppConfig {
    /// Parsed column list.
    pub fn columns(&self) -> Result<Vec<Column>> {
        if self.columns.is_empty() {
            return Ok(default_columns());
        }
        self.columns
            .iter()
            .map(|name| name.parse::<Column>().context("invalid `columns` entry"))
            .collect()
    }

    /// Replace `api_key` with the first non-empty token variable.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let token = TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name).map(|value| (*name, value)))
            .find(|(_, value)| !value.trim().is_empty());
        if let Some((name, value)) = token {
            log::debug!("Using API token from {name}");
            self.api_key = Some(value);
        }
    }
}

/// Configuration service trait
pub trait ConfigService {
    /// Load the configuration.
    fn load(&self) -> Result<AppConfig>;
}

/// JSON file configuration
pub struct JsonConfigService {
    path: PathBuf,
    /// The path came from `--config`, so it must exist.
    explicit: bool,
}

impl JsonConfigService {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self {
                path,
                explicit: true,
            }),
            None => Ok(Self {
                path: default_config_path()?,
                explicit: false,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            if self.explicit {
                anyhow::bail!("config file {} does not exist", self.path.display());
            }
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read()?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }
}

/// `<config dir>/droplet-dash`
pub fn app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not determine the config directory")?;
    Ok(base.join(APP_DIR))
}

fn default_config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE))
}
