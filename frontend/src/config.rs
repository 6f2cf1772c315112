const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_DARK_THEME_CLASS: &str = "dark-theme";

/// Settings shared by the navbar and its browser collaborators.
///
/// Provided as context by [`crate::app::App`]; components fall back to
/// [`NavbarConfig::default`] when none is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarConfig {
    pub api_base: String,
    pub theme_storage_key: String,
    pub dark_theme_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            dark_theme_class: DEFAULT_DARK_THEME_CLASS.to_string(),
        }
    }
}
