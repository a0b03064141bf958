//! Chat client configuration
//!
//! Endpoint resolution against a validated base URL.

use anyhow::{Context, Result};
use url::Url;

use crate::constants;

/// Configuration for the chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: Url,
}

impl ClientConfig {
    /// Parse and validate a base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid base URL: {}", base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("base URL must be http or https: {}", base_url);
        }
        Ok(Self { base_url })
    }

    /// Health probe URL
    pub fn health_url(&self) -> Url {
        self.endpoint(constants::http::HEALTH_PATH)
    }

    /// Chat submission URL
    pub fn chat_url(&self) -> Url {
        self.endpoint(constants::http::CHAT_PATH)
    }

    /// Join an absolute API path onto the base, keeping any base path prefix
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);
        url
    }
}
