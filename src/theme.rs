use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::config::THEME_STORAGE_KEY;
use crate::error::StorageError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::System => "◐",
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    pub fn follows_system(self) -> bool {
        matches!(self, Self::System)
    }

    pub fn is_dark(self, os_prefers_dark: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::System => os_prefers_dark,
        }
    }
}

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

pub trait ThemeSurface {
    // Read on every application, never cached.
    fn prefers_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: &'static str,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T) -> Self {
        Self::with_key(store, surface, THEME_STORAGE_KEY)
    }

    pub fn with_key(store: S, surface: T, key: &'static str) -> Self {
        Self {
            store,
            surface,
            key,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    /// Reads the persisted preference. Missing, unrecognized or unreadable
    /// values resolve to [`ThemePreference::System`]. Never writes.
    pub fn load_preference(&self) -> ThemePreference {
        match self.store.read(self.key) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                log::warn!("ignoring unrecognized theme preference {value:?}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                log::warn!("{err}; using the system theme");
                ThemePreference::default()
            }
        }
    }

    pub fn apply_preference(&self, preference: ThemePreference, os_prefers_dark: bool) {
        let dark = preference.is_dark(os_prefers_dark);
        log::debug!("applying {} theme (dark: {dark})", preference.as_str());
        self.surface.set_dark(dark);
    }

    pub fn refresh(&self, preference: ThemePreference) {
        self.apply_preference(preference, self.surface.prefers_dark());
    }

    /// Persists `preference`, then applies it. A failed write still changes
    /// the visible theme for this session.
    pub fn set_preference(&self, preference: ThemePreference) {
        if let Err(err) = self.store.write(self.key, preference.as_str()) {
            log::warn!("{err}; theme preference will not survive a reload");
        }
        self.refresh(preference);
    }
}
