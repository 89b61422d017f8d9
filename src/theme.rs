//! Light/dark theme selection and persistence.
//!
//! The active theme is one of two marker classes on `<body>`. The choice is
//! written to a [`PreferenceStore`] under [`THEME_STORAGE_KEY`]; reading back
//! anything other than `"light"` (including nothing) means dark.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot read looks the same as an
//! empty one, and failed writes are dropped after logging.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::{DARK_THEME_CLASS, LIGHT_THEME_CLASS, THEME_STORAGE_KEY};

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a persisted value. Only `"light"` selects light mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Marker class that must be present on `<body>` for this theme.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => LIGHT_THEME_CLASS,
            Self::Dark => DARK_THEME_CLASS,
        }
    }

    /// Infer the theme from the body's marker class.
    #[must_use]
    pub fn from_dark_class(has_dark_class: bool) -> Self {
        if has_dark_class { Self::Dark } else { Self::Light }
    }
}

/// Durable key-value slot for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns `false` if the value could not be written.
    fn set(&self, key: &str, value: &str) -> bool;
}

/// In-memory store for tests and for browsers with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        true
    }
}

/// Owns the current theme and keeps the store in step with it.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference. Nothing is written on load.
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. The flip happens even if the write fails.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if !self.store.set(THEME_STORAGE_KEY, self.current.as_str()) {
            #[cfg(feature = "hydrate")]
            log::debug!("theme preference not persisted");
        }
        self.current
    }

    /// Adopt a theme observed elsewhere (e.g. the body class) without persisting.
    pub fn sync(&mut self, theme: Theme) {
        self.current = theme;
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
