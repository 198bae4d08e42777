use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the chosen theme is persisted in local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Light/dark visual mode of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl Theme {
    /// Resolve the initial theme for a page load.
    ///
    /// A persisted value always wins. Without one, the OS-level color-scheme
    /// preference decides, and the final fallback is light. Storage being
    /// unreadable is modeled as `stored == None`, so the fallback path covers
    /// it with no separate error handling.
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Theme {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Single source of truth for the page's theme.
///
/// A thin wrapper over one reactive cell: every consumer reading through a
/// tracking context is re-notified synchronously on `set`/`toggle`. The store
/// is constructed once in `App` and handed to components as a prop.
/// Persistence and the document-root class are side effects layered on top in
/// the component tree, not here, which keeps this type testable off-browser.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Current theme; tracks when read inside a reactive context.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Flip between the two states, notifying all subscribers. Returns the
    /// new value so callers can persist or log it without re-reading.
    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_stored_value() {
        // Persisted value wins regardless of the OS preference
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), true), Theme::Dark);
    }

    #[test]
    fn test_resolve_falls_back_to_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_is_idempotent_in_pairs() {
        let store = ThemeStore::new(Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert!(store.is_dark());
        // Toggling twice returns to the original value
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.get_untracked(), Theme::Light);
    }

    #[test]
    fn test_toggle_from_os_resolved_light_yields_dark() {
        // Scenario: nothing persisted, OS preference light
        let store = ThemeStore::new(Theme::resolve(None, false));
        let persisted = store.toggle();
        assert_eq!(persisted, Theme::Dark);
        assert_eq!(persisted.to_string(), "dark");
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert!("solarized".parse::<Theme>().is_err());
    }
}
