//! Page markup contract.
//!
//! Element ids the server templates render and pure helpers over the values
//! read from them. Everything here compiles without a browser.

use prefs::{Preference, StoreKind, ToggleConfig};

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

pub const TOGGLE_ANSWER_ID: &str = "toggle-answer";
pub const ANSWER_ID: &str = "answer";
pub const SET_CATEGORIES_ID: &str = "set-categories";
pub const SELECT_ALL_ID: &str = "select-all";
pub const SELECT_NONE_ID: &str = "select-none";
pub const COUNT_CATEGORIES_ID: &str = "count-categories";
pub const LIGHT_RADIO_ID: &str = "light-mode";
pub const DARK_RADIO_ID: &str = "dark-mode";

/// Root attribute naming the store variant (`local`, `cookie`, `remote`).
pub const STORE_ATTRIBUTE: &str = "data-theme-store";
/// Root attribute naming the palette (`solarized`, `contrast`).
pub const PALETTE_ATTRIBUTE: &str = "data-theme-palette";
/// Root attribute naming the init policy (`light_only`, `always`, `never`).
pub const INIT_ATTRIBUTE: &str = "data-theme-init";
/// Selects the checked theme radio; its `value` is `lightMode` / `darkMode`.
pub const CHECKED_THEME_SELECTOR: &str = "input[name=\"theme\"]:checked";
pub const THEME_STYLESHEET_SELECTOR: &str = "link[rel=\"stylesheet\"][href*=\"Mode.css\"]";
pub const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"]";

/// Display value the answer block flips to on click.
#[must_use]
pub fn next_answer_display(current: &str) -> &'static str {
    if current == "block" { "none" } else { "block" }
}

/// Theme a page was rendered with, from its stylesheet link
/// (`/css/lightMode.css`).
#[must_use]
pub fn theme_from_stylesheet_href(href: &str) -> Option<Preference> {
    let file = href.rsplit('/').next()?;
    let name = file.split(['?', '#']).next()?.strip_suffix(".css")?;
    Preference::from_theme_name(name)
}

/// Store variant for a page: the explicit root attribute wins, otherwise the
/// first trigger present decides. The remote trigger is checked first since
/// the settings page also carries a `dark-mode` radio.
pub fn resolve_store(attribute: Option<&str>, has_element: impl Fn(&str) -> bool) -> Option<StoreKind> {
    if let Some(raw) = attribute {
        if let Ok(kind) = raw.parse() {
            return Some(kind);
        }
    }
    [StoreKind::Remote, StoreKind::Cookie, StoreKind::Local]
        .into_iter()
        .find(|kind| has_element(kind.trigger()))
}

/// Toggle configuration for a resolved store, with the page's palette and
/// init attributes layered over the store defaults.
#[must_use]
pub fn resolve_config(kind: StoreKind, palette: Option<&str>, init: Option<&str>) -> ToggleConfig {
    ToggleConfig::for_store(kind).with_overrides(palette, init)
}
