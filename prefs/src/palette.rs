//! Static colour tables applied as CSS custom properties on `:root`.

use std::fmt::Write as _;

use crate::preference::Preference;

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// One theme's fixed mapping of custom property name to colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub vars: &'static [(&'static str, &'static str)],
}

impl Palette {
    /// Colour for `name`, if this palette defines it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.vars.iter().find(|(var, _)| *var == name).map(|(_, value)| *value)
    }

    /// Render as a `:root` rule, one declaration per line.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.vars {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

pub const SOLARIZED_DARK: Palette = Palette {
    vars: &[
        ("--background", "#002b36"),
        ("--highlight", "#073642"),
        ("--comment", "#586e75"),
        ("--content", "#839496"),
        ("--emphasis", "#93a1a1"),
    ],
};

pub const SOLARIZED_LIGHT: Palette = Palette {
    vars: &[
        ("--background", "#fdf6e3"),
        ("--highlight", "#eee8d5"),
        ("--comment", "#93a1a1"),
        ("--content", "#657b83"),
        ("--emphasis", "#586e75"),
    ],
};

pub const CONTRAST_DARK: Palette = Palette {
    vars: &[("--foreground", "#ffffff"), ("--background", "#000000")],
};

pub const CONTRAST_LIGHT: Palette = Palette {
    vars: &[("--foreground", "#000000"), ("--background", "#ffffff")],
};

/// A light and a dark palette over the same variable names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteSet {
    pub light: Palette,
    pub dark: Palette,
}

impl PaletteSet {
    pub const SOLARIZED: Self = Self { light: SOLARIZED_LIGHT, dark: SOLARIZED_DARK };
    pub const CONTRAST: Self = Self { light: CONTRAST_LIGHT, dark: CONTRAST_DARK };

    #[must_use]
    pub fn for_preference(&self, preference: Preference) -> &Palette {
        match preference {
            Preference::Light => &self.light,
            Preference::Dark => &self.dark,
        }
    }
}
