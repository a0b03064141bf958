//! Chat backend client
//!
//! HTTP client for the two backend endpoints:
//! - `GET /api/health` - reachability probe
//! - `POST /api/chat` - streamed chat completion

pub mod config;
pub mod core;
pub mod health;
pub mod streaming;

#[cfg(test)]
mod test_server;

// Re-export main types
pub use config::ClientConfig;
pub use self::core::ChatClient;
pub use health::is_healthy_status;
