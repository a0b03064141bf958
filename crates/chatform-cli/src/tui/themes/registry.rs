//! Theme registry for discovering and accessing themes

use super::Theme;
use std::collections::HashMap;

use chatform_core::constants;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    default: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        use super::definitions::*;

        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            default: default_theme(),
        };

        registry.register(default_theme());
        registry.register(tokyo_night());
        registry.register(dracula());
        registry.register(nord());
        registry.register(gruvbox_dark());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(constants::ui::DEFAULT_THEME))
            .unwrap_or(&self.default)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
