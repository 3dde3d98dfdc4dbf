//! Theme Toggle
//!
//! Dark mode lives in two places: a class on `<body>` and a single
//! `localStorage` key. The key holds `"dark"` or is absent; light mode is
//! never written out.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, HtmlInputElement, Storage};

use crate::config::ThemeConfig;
use crate::dom::{self, Listener};
use crate::error::{ShellError, ShellResult};

/// Stored value meaning "dark mode on"
pub const DARK_VALUE: &str = "dark";

/// Colour scheme of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference; anything but `"dark"` is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_VALUE) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Key/value persistence for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> ShellResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ShellResult<()>;
    fn remove(&self, key: &str) -> ShellResult<()>;
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> ShellResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| ShellError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| ShellError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> ShellResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ShellError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> ShellResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ShellError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> ShellResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ShellError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store, used when `localStorage` is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> ShellResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ShellResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ShellResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Open `localStorage`, falling back to memory so the toggle keeps working
pub fn open_store() -> Rc<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!("Theme preference will not persist: {}", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// Saved theme; storage failures read as light
pub fn load_theme(store: &dyn PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            tracing::warn!("Failed to read theme preference: {}", e);
            Theme::Light
        }
    }
}

/// Persist `theme`: dark writes the key, light removes it
pub fn save_theme(store: &dyn PreferenceStore, key: &str, theme: Theme) -> ShellResult<()> {
    match theme {
        Theme::Dark => store.set(key, DARK_VALUE),
        Theme::Light => store.remove(key),
    }
}

/// Theme currently shown on `body`
pub fn body_theme(body: &HtmlElement, dark_class: &str) -> Theme {
    if body.class_list().contains(dark_class) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Apply the saved theme to `body` before anything else renders
pub fn restore_saved_theme(
    document: &Document,
    config: &ThemeConfig,
    store: &dyn PreferenceStore,
) -> Theme {
    let theme = load_theme(store, &config.storage_key);
    if theme.is_dark() {
        if let Some(body) = document.body() {
            dom::set_class(&body, &config.dark_class, true);
        }
    }
    tracing::debug!("Restored theme: {:?}", theme);
    theme
}

/// Binding between the theme checkbox and the body class
#[derive(Debug)]
pub struct ThemeToggle {
    _change: Listener,
}

impl ThemeToggle {
    /// Bind the checkbox if this fragment has one
    pub fn bind(
        document: &Document,
        config: &ThemeConfig,
        store: Rc<dyn PreferenceStore>,
    ) -> Option<Self> {
        let Some(checkbox) = dom::by_id::<HtmlInputElement>(document, &config.toggle_id) else {
            tracing::trace!("No #{} in fragment, skipping theme toggle", config.toggle_id);
            return None;
        };
        let body = document.body()?;

        checkbox.set_checked(body_theme(&body, &config.dark_class).is_dark());

        let dark_class = config.dark_class.clone();
        let key = config.storage_key.clone();
        let change = Listener::new(&checkbox, "change", move |_| {
            if let Err(e) = body.class_list().toggle(&dark_class) {
                tracing::warn!("Failed to toggle {}: {:?}", dark_class, e);
                return;
            }
            let theme = body_theme(&body, &dark_class);
            if let Err(e) = save_theme(store.as_ref(), &key, theme) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
            tracing::debug!("Theme switched to {:?}", theme);
        });

        Some(Self { _change: change })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_save_dark_writes_key() {
        let store = MemoryStore::new();
        save_theme(&store, "theme", Theme::Dark).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(load_theme(&store, "theme"), Theme::Dark);
    }

    #[test]
    fn test_save_light_removes_key() {
        let store = MemoryStore::new();
        save_theme(&store, "theme", Theme::Dark).unwrap();
        save_theme(&store, "theme", Theme::Light).unwrap();

        // Removed entirely, not set to some falsy value
        assert!(!store.contains("theme"));
        assert_eq!(load_theme(&store, "theme"), Theme::Light);
    }

    #[test]
    fn test_light_on_empty_store() {
        let store = MemoryStore::new();
        save_theme(&store, "theme", Theme::Light).unwrap();
        assert!(!store.contains("theme"));
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _: &str) -> ShellResult<Option<String>> {
            Err(ShellError::Storage("denied".to_string()))
        }
        fn set(&self, _: &str, _: &str) -> ShellResult<()> {
            Err(ShellError::Storage("denied".to_string()))
        }
        fn remove(&self, _: &str) -> ShellResult<()> {
            Err(ShellError::Storage("denied".to_string()))
        }
    }

    #[test]
    fn test_broken_store_reads_light() {
        assert_eq!(load_theme(&BrokenStore, "theme"), Theme::Light);
        assert!(save_theme(&BrokenStore, "theme", Theme::Dark).is_err());
    }
}
