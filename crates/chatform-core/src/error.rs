//! Chat error types

use thiserror::Error;

use crate::constants;

/// Errors surfaced by a chat submission or a health probe
///
/// Every variant renders to the single string shown in the response pane.
#[derive(Debug, Error)]
pub enum ChatError {
    /// One or more required fields were empty at submit time
    #[error("{}", constants::chat::VALIDATION_MESSAGE)]
    Validation,

    /// The backend answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (DNS, refused, TLS, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The connection dropped after the response started streaming
    #[error("stream interrupted: {0}")]
    Stream(String),
}

impl ChatError {
    /// HTTP status code, if the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// True for errors raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::Validation)
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err.to_string())
    }
}
