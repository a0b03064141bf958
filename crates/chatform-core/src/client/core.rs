//! Core chat client
//!
//! The `ChatClient` struct owning the HTTP connection pool and endpoint config.

use reqwest::Client;
use tracing::error;

use super::config::ClientConfig;
use crate::constants;

/// HTTP client for the chat backend
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    config: ClientConfig,
}

impl ChatClient {
    /// Create the HTTP client with configuration suited to long-lived streams
    fn create_http_client() -> Client {
        Client::builder()
            .user_agent(constants::http::USER_AGENT)
            .connect_timeout(constants::http::CONNECT_TIMEOUT)
            // No overall timeout: a streamed body stays open until the backend ends it
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Self::create_http_client(),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
