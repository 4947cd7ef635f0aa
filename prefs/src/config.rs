//! Variant selection.
//!
//! The three toggle variants differ only in store, palette and init policy,
//! so one controller is configured per trigger instead of one script each.

use serde::{Deserialize, Serialize};

use crate::applier::{InitPolicy, ThemeApplier};
use crate::palette::PaletteSet;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Trigger element id for the local-storage toggle.
pub const LOCAL_TRIGGER: &str = "dark-mode";
/// Trigger element id for the cookie toggle.
pub const COOKIE_TRIGGER: &str = "toggle-theme";
/// Trigger element id for the server-persisted theme radios.
pub const REMOTE_TRIGGER: &str = "set-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Local,
    Cookie,
    Remote,
}

impl StoreKind {
    /// Spelling used in markup attributes and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Cookie => "cookie",
            Self::Remote => "remote",
        }
    }

    /// Element id whose click drives this variant.
    #[must_use]
    pub fn trigger(self) -> &'static str {
        match self {
            Self::Local => LOCAL_TRIGGER,
            Self::Cookie => COOKIE_TRIGGER,
            Self::Remote => REMOTE_TRIGGER,
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "local" => Ok(Self::Local),
            "cookie" => Ok(Self::Cookie),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown theme store: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    #[default]
    Solarized,
    Contrast,
}

impl PaletteKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solarized => "solarized",
            Self::Contrast => "contrast",
        }
    }

    #[must_use]
    pub fn palettes(self) -> PaletteSet {
        match self {
            Self::Solarized => PaletteSet::SOLARIZED,
            Self::Contrast => PaletteSet::CONTRAST,
        }
    }
}

impl std::str::FromStr for PaletteKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "solarized" => Ok(Self::Solarized),
            "contrast" => Ok(Self::Contrast),
            other => Err(format!("unknown theme palette: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    pub store: StoreKind,
    #[serde(default)]
    pub palette: PaletteKind,
    #[serde(default)]
    pub init: InitPolicy,
}

impl ToggleConfig {
    /// Configuration for a known trigger element id.
    #[must_use]
    pub fn for_trigger(id: &str) -> Option<Self> {
        match id {
            LOCAL_TRIGGER => Some(Self::for_store(StoreKind::Local)),
            COOKIE_TRIGGER => Some(Self::for_store(StoreKind::Cookie)),
            REMOTE_TRIGGER => Some(Self::for_store(StoreKind::Remote)),
            _ => None,
        }
    }

    /// Default configuration for a store kind: Solarized throughout, eager
    /// light-only init for the local store, server-rendered otherwise.
    #[must_use]
    pub fn for_store(store: StoreKind) -> Self {
        let init = match store {
            StoreKind::Local => InitPolicy::LightOnly,
            StoreKind::Cookie | StoreKind::Remote => InitPolicy::Never,
        };
        Self { store, palette: PaletteKind::Solarized, init }
    }

    /// Override palette and init policy from their markup spellings.
    /// Unknown or absent values keep the store's defaults.
    #[must_use]
    pub fn with_overrides(mut self, palette: Option<&str>, init: Option<&str>) -> Self {
        if let Some(palette) = palette.and_then(|raw| raw.parse().ok()) {
            self.palette = palette;
        }
        if let Some(init) = init.and_then(|raw| raw.parse().ok()) {
            self.init = init;
        }
        self
    }

    #[must_use]
    pub fn applier(&self) -> ThemeApplier {
        ThemeApplier::new(self.palette.palettes(), self.init)
    }
}
