//! Application constants and configuration defaults
//!
//! Centralized location for endpoint paths and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    ///
    /// Only bounds the TCP/TLS handshake. There is no overall request timeout:
    /// a streamed response stays open for as long as the backend keeps writing.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("chatform/", env!("CARGO_PKG_VERSION"));

    /// Default backend base URL
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Health probe endpoint, relative to the base URL
    pub const HEALTH_PATH: &str = "/api/health";

    /// Chat submission endpoint, relative to the base URL
    pub const CHAT_PATH: &str = "/api/chat";
}

/// Chat form configuration
pub mod chat {
    /// Shown when a required field is empty at submit time
    pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields";

    /// Shown when a request fails without a more specific message
    pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".chatform";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "default";
}
