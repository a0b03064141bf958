//! Terminal User Interface for chatform

pub mod app;
pub mod channels;
pub mod components;
pub mod handlers;
pub mod input;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
pub use themes::THEME_REGISTRY;
