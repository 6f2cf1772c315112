use shared::{NavbarError, Theme};
use std::cell::Cell;

/// Persisted theme preference.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, NavbarError>;
    fn store(&self, theme: Theme) -> Result<(), NavbarError>;
}

/// Element whose class list reflects the dark theme.
pub trait ThemeRoot {
    fn set_dark(&self, enabled: bool);
}

/// `window.localStorage`, read and written as raw strings so the stored
/// value is the bare `dark` / `light` literal.
pub struct LocalThemeStorage {
    key: String,
}

impl LocalThemeStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, NavbarError> {
        web_sys::window()
            .ok_or_else(|| NavbarError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| NavbarError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| NavbarError::Storage("localStorage disabled".to_string()))
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, NavbarError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| NavbarError::Storage(format!("{:?}", e)))
    }

    fn store(&self, theme: Theme) -> Result<(), NavbarError> {
        Self::storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|e| NavbarError::Storage(format!("{:?}", e)))
    }
}

/// Toggles a class on `document.body`.
pub struct BodyClass {
    class: String,
}

impl BodyClass {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl ThemeRoot for BodyClass {
    fn set_dark(&self, enabled: bool) {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(body) = document.body() {
                    let _ = body.class_list().toggle_with_force(&self.class, enabled);
                }
            }
        }
    }
}

/// Light/dark state machine kept in agreement with storage and the root
/// element class.
pub struct ThemeController<S, R> {
    storage: S,
    root: R,
    theme: Cell<Theme>,
}

impl<S: ThemeStorage, R: ThemeRoot> ThemeController<S, R> {
    pub fn new(storage: S, root: R) -> Self {
        Self {
            storage,
            root,
            theme: Cell::new(Theme::Light),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Adopt the persisted preference (light when missing or unknown), write
    /// it back in canonical form and apply it.
    pub fn init(&self) -> Theme {
        let stored = match self.storage.load() {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("Could not read theme preference: {}", err);
                None
            }
        };

        let theme = Theme::from_stored(stored.as_deref());
        self.theme.set(theme);

        if let Err(err) = self.storage.store(theme) {
            log::warn!("Could not persist theme preference: {}", err);
        }
        self.root.set_dark(theme.is_dark());
        theme
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.theme.get().toggled();
        self.theme.set(theme);

        if let Err(err) = self.storage.store(theme) {
            log::warn!("Could not persist theme preference: {}", err);
        }
        self.root.set_dark(theme.is_dark());
        theme
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_has(class: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.class_list().contains(class))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn test_body_class_toggle_is_idempotent() {
        let root = BodyClass::new("dark-theme-test");

        root.set_dark(true);
        root.set_dark(true);
        assert!(body_has("dark-theme-test"));

        root.set_dark(false);
        assert!(!body_has("dark-theme-test"));
    }

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = LocalThemeStorage::new("theme-test");

        storage.store(Theme::Dark).unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("dark"));

        storage.store(Theme::Light).unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("light"));
    }
}
