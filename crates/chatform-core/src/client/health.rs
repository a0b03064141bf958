//! Health probe
//!
//! One GET against the health endpoint, mapped to online/offline.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::{info, warn};

use super::core::ChatClient;
use crate::status::ApiStatus;

/// 2xx and 3xx count as reachable
pub fn is_healthy_status(status: StatusCode) -> bool {
    status.is_success() || status.is_redirection()
}

impl ChatClient {
    /// Probe the health endpoint
    ///
    /// Never fails: any transport error or unhealthy status maps to offline.
    /// No retry and no timeout beyond the transport's connect timeout.
    pub async fn check_health(&self) -> ApiStatus {
        let url = self.config().health_url();
        info!("Checking API health at {}", url);

        match self
            .http()
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                let ok = is_healthy_status(status);
                info!("API health response: {} (online: {})", status, ok);
                ApiStatus::from_probe(ok)
            }
            Err(e) => {
                warn!("API health check failed: {}", e);
                ApiStatus::offline()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_server::{closed_port_url, Reply, TestServer};
    use crate::client::ClientConfig;

    fn client_for(url: &str) -> ChatClient {
        ChatClient::new(ClientConfig::new(url).unwrap())
    }

    #[test]
    fn test_healthy_status_ranges() {
        assert!(is_healthy_status(StatusCode::OK));
        assert!(is_healthy_status(StatusCode::NO_CONTENT));
        assert!(is_healthy_status(StatusCode::NOT_MODIFIED));
        assert!(!is_healthy_status(StatusCode::NOT_FOUND));
        assert!(!is_healthy_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_healthy_status(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_health_ok_is_online() {
        let server = TestServer::start(Reply::Status(200));
        let client = client_for(&server.url());

        assert_eq!(client.check_health().await, ApiStatus::online());

        let requests = server.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/health");
        assert_eq!(requests[0].header("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_health_error_status_is_offline() {
        let server = TestServer::start(Reply::Status(503));
        let client = client_for(&server.url());
        assert_eq!(client.check_health().await, ApiStatus::offline());
    }

    #[tokio::test]
    async fn test_health_network_error_is_offline() {
        let client = client_for(&closed_port_url());
        assert_eq!(client.check_health().await, ApiStatus::offline());
    }
}
