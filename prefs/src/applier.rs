//! Applies palettes to the page root.

use serde::{Deserialize, Serialize};

use crate::host::Page;
use crate::palette::PaletteSet;
use crate::preference::Preference;

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;

/// What [`ThemeApplier::init`] does with the resolved preference at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitPolicy {
    /// Only a light preference is applied; dark is left to the stylesheet.
    #[default]
    LightOnly,
    /// The dark palette is applied as a baseline, then overridden if light.
    Always,
    /// The server rendered the theme; the page is left untouched.
    Never,
}

impl InitPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LightOnly => "light_only",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl std::str::FromStr for InitPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light_only" => Ok(Self::LightOnly),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown theme init policy: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeApplier {
    pub palettes: PaletteSet,
    pub policy: InitPolicy,
}

impl ThemeApplier {
    #[must_use]
    pub fn new(palettes: PaletteSet, policy: InitPolicy) -> Self {
        Self { palettes, policy }
    }

    /// Set every variable of the palette for `preference` on the root.
    pub fn apply<P: Page + ?Sized>(&self, page: &P, preference: Preference) {
        for (name, value) in self.palettes.for_preference(preference).vars {
            page.set_style_property(name, value);
        }
    }

    /// Apply the stored preference according to the init policy and return
    /// the resolved value.
    pub fn init<P: Page + ?Sized>(&self, page: &P, stored: Option<Preference>) -> Preference {
        let resolved = Preference::resolve(stored);
        match self.policy {
            InitPolicy::LightOnly => {
                if resolved == Preference::Light {
                    self.apply(page, resolved);
                }
            }
            InitPolicy::Always => {
                self.apply(page, Preference::Dark);
                if resolved == Preference::Light {
                    self.apply(page, resolved);
                }
            }
            InitPolicy::Never => {}
        }
        log::debug!("theme initialised: {resolved} ({:?})", self.policy);
        resolved
    }
}
