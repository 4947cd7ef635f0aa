//! The persisted light/dark theme value.
//!
//! Each backend stores the same fact under its own spelling: local storage
//! uses `light`/`dark`, the cookie and the server endpoint use
//! `lightMode`/`darkMode`. Parsing is strict; callers treat an unknown
//! spelling the same as an absent value.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Theme preference. `Dark` is the implicit default when nothing is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Light,
    #[default]
    Dark,
}

impl Preference {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Local-storage spelling (`mode` entry).
    #[must_use]
    pub fn as_mode(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Cookie and endpoint spelling (`colorTheme` value, `/theme/{value}`).
    #[must_use]
    pub fn as_theme_name(self) -> &'static str {
        match self {
            Self::Light => "lightMode",
            Self::Dark => "darkMode",
        }
    }

    #[must_use]
    pub fn from_mode(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_theme_name(raw: &str) -> Option<Self> {
        match raw {
            "lightMode" => Some(Self::Light),
            "darkMode" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve a stored value, defaulting to dark when absent.
    #[must_use]
    pub fn resolve(stored: Option<Self>) -> Self {
        stored.unwrap_or_default()
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_mode())
    }
}
