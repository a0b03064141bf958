//! User configuration
//!
//! Loaded from `~/.chatform/config.toml`. Every key is optional; anything
//! left unset falls back to the defaults in [`crate::constants`]. The API key
//! is never read from here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::ClientConfig;
use crate::constants;
use crate::form::ChatModel;
use crate::paths;

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "CHATFORM_BASE_URL";

/// Settings from the config file, env and CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin
    pub base_url: Option<String>,
    /// Preselected model
    pub model: Option<ChatModel>,
    /// Theme name
    pub theme: Option<String>,
}

impl AppConfig {
    /// Default config file path
    pub fn path() -> PathBuf {
        paths::config_file()
    }

    /// Load a config file
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_path = Self::path();
        let mut config = Self::load_from(path.unwrap_or(default_path.as_path()))?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|s| !s.trim().is_empty()) {
            debug!("Base URL overridden by {}", BASE_URL_ENV);
            self.base_url = Some(url);
        }
    }

    /// Apply command-line overrides; `None` leaves the current value
    pub fn merge_flags(
        &mut self,
        base_url: Option<String>,
        model: Option<ChatModel>,
        theme: Option<String>,
    ) {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if model.is_some() {
            self.model = model;
        }
        if theme.is_some() {
            self.theme = theme;
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(constants::http::DEFAULT_BASE_URL)
    }

    /// Validated client configuration for the effective base URL
    pub fn client_config(&self) -> Result<ClientConfig> {
        ClientConfig::new(self.base_url())
    }

    pub fn model(&self) -> ChatModel {
        self.model.unwrap_or_default()
    }

    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(constants::ui::DEFAULT_THEME)
    }
}
