//! Chatform Core - form state, health probing and streamed chat submission
//!
//! This crate provides everything behind the chat form except rendering:
//! - Form data, validation and the request payload
//! - Page state and its transitions
//! - HTTP client for the health and chat endpoints
//! - Stateful UTF-8 decoding of the streamed response body
//! - A cancellable submission task reporting through a channel

pub mod backend;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod paths;
pub mod state;
pub mod status;
pub mod stream;
pub mod submit;

// Re-exports for convenience
pub use backend::ChatBackend;
pub use client::{ChatClient, ClientConfig};
pub use config::AppConfig;
pub use error::ChatError;
pub use form::{ChatModel, ChatRequest, FormData};
pub use state::PageState;
pub use status::{ApiStatus, Health};
pub use stream::ChunkStream;
pub use submit::{spawn_submission, SubmitEvent, SubmitOutcome};
