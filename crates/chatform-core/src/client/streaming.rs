//! Streaming chat submission
//!
//! POSTs the form payload and hands back the response body as a `ChunkStream`.

use std::time::Instant;

use tracing::{error, info};

use super::core::ChatClient;
use crate::error::ChatError;
use crate::form::{ChatRequest, FormData};
use crate::stream::ChunkStream;

impl ChatClient {
    /// Validate the form and open a streamed chat response
    ///
    /// Validation failures return before any network activity.
    pub async fn submit(&self, form: &FormData) -> Result<ChunkStream, ChatError> {
        let request = form.to_request()?;
        self.open_stream(&request).await
    }

    /// Send a chat request and return its body as a text stream
    ///
    /// A non-success status fails with [`ChatError::Http`] without reading the body.
    pub async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, ChatError> {
        let call_start = Instant::now();
        let url = self.config().chat_url();
        info!("=== CHAT REQUEST START ===");
        info!("Model: {}, URL: {}", request.model, url);

        let response = self.http().post(url).json(request).send().await?;

        let status = response.status();
        info!("Chat response: {} in {:?}", status, call_start.elapsed());

        if !status.is_success() {
            error!("Chat request failed with status {}", status);
            return Err(ChatError::Http {
                status: status.as_u16(),
            });
        }

        Ok(ChunkStream::new(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_server::{closed_port_url, Reply, TestServer};
    use crate::client::ClientConfig;
    use crate::form::ChatModel;

    fn client_for(url: &str) -> ChatClient {
        ChatClient::new(ClientConfig::new(url).unwrap())
    }

    fn filled_form() -> FormData {
        FormData {
            developer_message: "Be brief.".to_string(),
            user_message: "Greet me".to_string(),
            model: ChatModel::Gpt35Turbo,
            api_key: "sk-test-key".to_string(),
        }
    }

    #[tokio::test]
    async fn test_streamed_body_is_decoded_in_order() {
        let server = TestServer::start(Reply::Chunked(vec![
            b"Hel".to_vec(),
            b"lo w\xC3".to_vec(),
            b"\xB6rld".to_vec(),
        ]));
        let client = client_for(&server.url());

        let stream = client.submit(&filled_form()).await.unwrap();
        assert_eq!(stream.collect_text().await.unwrap(), "Hello wörld");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/chat");
        assert!(request
            .header("content-type")
            .is_some_and(|v| v.starts_with("application/json")));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "developer_message": "Be brief.",
                "user_message": "Greet me",
                "model": "gpt-3.5-turbo",
                "api_key": "sk-test-key",
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_carries_status() {
        let server = TestServer::start(Reply::Status(500));
        let client = client_for(&server.url());

        let err = client.submit(&filled_form()).await.err().unwrap();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let server = TestServer::start(Reply::Status(200));
        let client = client_for(&server.url());

        let mut form = filled_form();
        form.user_message.clear();
        let err = client.submit(&form).await.err().unwrap();
        assert!(err.is_validation());
        assert_eq!(server.request_count(), 0);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = client_for(&closed_port_url());
        let err = client.submit(&filled_form()).await.err().unwrap();
        assert!(matches!(err, ChatError::Transport(_)));
    }
}
