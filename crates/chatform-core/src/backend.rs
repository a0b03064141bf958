//! Backend seam used by the UI
//!
//! The UI talks to the chat service only through [`ChatBackend`], so it can
//! be driven by an in-memory backend in tests.

use async_trait::async_trait;

use crate::client::ChatClient;
use crate::error::ChatError;
use crate::form::ChatRequest;
use crate::status::ApiStatus;
use crate::stream::ChunkStream;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Probe reachability; never fails
    async fn check_health(&self) -> ApiStatus;

    /// Send a validated request and return the streamed response text
    async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, ChatError>;
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn check_health(&self) -> ApiStatus {
        ChatClient::check_health(self).await
    }

    async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, ChatError> {
        ChatClient::open_stream(self, request).await
    }
}
