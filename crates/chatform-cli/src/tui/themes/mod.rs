//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global registry of built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Colors used by every component
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    pub bg_color: Color,
    pub border_color: Color,
    /// Border of the focused field
    pub focus_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub dim_color: Color,

    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    pub status_bar_bg_color: Color,
}
