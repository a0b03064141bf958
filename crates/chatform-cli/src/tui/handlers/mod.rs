//! Event handlers for the App
//!
//! Each module adds `impl App` blocks for one concern.

pub mod health;
pub mod keyboard;
pub mod submit;
