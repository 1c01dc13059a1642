use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

const LIGHT_ICON_CLASS: &str = "fas fa-sun";
const DARK_ICON_CLASS: &str = "fas fa-moon";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Result<Self, ThemeParseError> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError {
                value: other.to_string(),
            }),
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON_CLASS,
            Self::Dark => DARK_ICON_CLASS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{value}', expected 'light' or 'dark'")]
pub struct ThemeParseError {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Browser-local key-value storage, reduced to what the page needs.
///
/// Methods take `&self`; implementations backed by the platform (or a
/// `RefCell` in tests) handle their own interior mutability.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like storage blocked by privacy settings.
    pub fn read_only() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of [`ThemeManager::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLoad {
    pub theme: Theme,
    /// Set when the default had to be written back and the write failed.
    pub persist_error: Option<StoreError>,
}

/// Two-state light/dark machine over a [`PreferenceStore`].
///
/// The applied theme lives here; the body class and icon are rendered from
/// [`ThemeManager::applied`] by the caller.
pub struct ThemeManager<S> {
    store: S,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            applied: Theme::default(),
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn stored_preference(&self) -> Option<Theme> {
        self.store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw).ok())
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.stored_preference().is_some()
    }

    pub fn load(&mut self) -> ThemeLoad {
        if let Some(theme) = self.stored_preference() {
            self.applied = theme;
            return ThemeLoad {
                theme,
                persist_error: None,
            };
        }
        self.applied = Theme::Light;
        let persist_error = self.store.set(THEME_KEY, Theme::Light.as_str()).err();
        ThemeLoad {
            theme: Theme::Light,
            persist_error,
        }
    }

    /// Flips the applied theme and persists it. The applied theme changes
    /// even when the write fails.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.applied.toggled();
        self.applied = next;
        self.store.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }

    /// Reacts to an OS color-scheme change. Ignored once the user (or the
    /// first load) has stored a preference.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.applied = theme;
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_the_two_literals() {
        assert_eq!(Theme::parse("light"), Ok(Theme::Light));
        assert_eq!(Theme::parse("dark"), Ok(Theme::Dark));
        assert!(Theme::parse("Dark").is_err());
        assert!(Theme::parse("").is_err());
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn serde_uses_lowercase_literals() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn load_applies_stored_dark() {
        let mut manager = ThemeManager::new(MemoryStore::with_value(THEME_KEY, "dark"));
        let load = manager.load();
        assert_eq!(load.theme, Theme::Dark);
        assert_eq!(manager.applied(), Theme::Dark);
        assert_eq!(manager.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn load_replaces_unknown_value_with_light() {
        let mut manager = ThemeManager::new(MemoryStore::with_value(THEME_KEY, "sepia"));
        manager.load();
        assert_eq!(manager.applied(), Theme::Light);
        assert_eq!(manager.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn padded_stored_value_is_rewritten() {
        let store = MemoryStore::with_value(THEME_KEY, " dark ");
        let mut manager = ThemeManager::new(&store);
        assert_eq!(manager.load().theme, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn load_reports_failed_default_write() {
        let mut manager = ThemeManager::new(MemoryStore::read_only());
        let load = manager.load();
        assert_eq!(load.theme, Theme::Light);
        assert!(matches!(load.persist_error, Some(StoreError::Write { .. })));
    }

    #[test]
    fn toggle_flips_even_when_write_fails() {
        let mut manager = ThemeManager::new(MemoryStore::read_only());
        manager.load();
        assert!(manager.toggle().is_err());
        assert_eq!(manager.applied(), Theme::Dark);
    }

    #[test]
    fn system_change_only_applies_without_stored_preference() {
        let mut manager = ThemeManager::new(MemoryStore::read_only());
        assert_eq!(manager.system_scheme_changed(true), Some(Theme::Dark));
        assert_eq!(manager.applied(), Theme::Dark);

        let mut manager = ThemeManager::new(MemoryStore::with_value(THEME_KEY, "light"));
        manager.load();
        assert_eq!(manager.system_scheme_changed(true), None);
        assert_eq!(manager.applied(), Theme::Light);
    }

    #[test]
    fn icon_tracks_theme() {
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    }
}
