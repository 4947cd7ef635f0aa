//! Page rendering.
//!
//! Both pages carry the theme variant on the root element
//! (`data-theme-store`, `data-theme-palette`, optional `data-theme-init`) so
//! the browser bundle binds the right store without guessing from ids.

use std::fmt::Write as _;

use prefs::{InitPolicy, PaletteKind, Preference, StoreKind};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Theme variant advertised on a page root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRoot {
    pub store: StoreKind,
    pub palette: PaletteKind,
    pub init: Option<InitPolicy>,
}

impl ThemeRoot {
    fn attributes(self) -> String {
        let mut attrs = format!(
            " data-theme-store=\"{}\" data-theme-palette=\"{}\"",
            self.store.as_str(),
            self.palette.as_str()
        );
        if let Some(init) = self.init {
            let _ = write!(attrs, " data-theme-init=\"{}\"", init.as_str());
        }
        attrs
    }
}

pub struct SettingsView<'a> {
    pub version: &'a str,
    pub theme: Preference,
    pub root: ThemeRoot,
    pub categories: &'a [String],
    pub enabled: &'a [String],
}

pub struct HomeView<'a> {
    pub version: &'a str,
    pub theme: Preference,
    pub root: ThemeRoot,
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn category_items(view: &SettingsView<'_>) -> String {
    let mut items = String::new();
    for name in view.categories {
        let name = escape_html(name);
        let checked = if view.enabled.iter().any(|e| escape_html(e) == name) { " checked" } else { "" };
        let _ = writeln!(
            items,
            "          <li><label><input type=\"checkbox\" name=\"{name}\"{checked}>{name}</label></li>"
        );
    }
    items
}

fn radio(id: &str, theme: Preference, current: Preference, label: &str) -> String {
    let checked = if theme == current { " checked" } else { "" };
    format!(
        "      <input type=\"radio\" id=\"{id}\" name=\"theme\" value=\"{value}\"{checked} />\n      <label for=\"{id}\">{label}</label><br />\n",
        value = theme.as_theme_name(),
    )
}

/// Full settings document. The theme radios always post to the server, so
/// the root advertises the remote store whatever `view.root.store` says.
pub fn render_settings(view: &SettingsView<'_>) -> String {
    let root = ThemeRoot { store: StoreKind::Remote, ..view.root }.attributes();
    let version = escape_html(view.version);
    let theme = view.theme.as_theme_name();
    let categories = category_items(view);
    let light = radio("light-mode", Preference::Light, view.theme, "Light mode");
    let dark = radio("dark-mode", Preference::Dark, view.theme, "Dark mode");

    format!(
        r#"<!DOCTYPE html>
<html lang="en-US"{root}>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Trivia v{version}</title>
    <link rel="stylesheet" href="/css/{theme}.css" />
    <script type="module" src="/js/boot.js"></script>
  </head>
  <body>
    <div class="settings-container">
      <div class="settings-item">
        <h2>Categories</h2>
        <button id="select-all">Select all</button>
        <button id="select-none">Select none</button>
        <ul>
{categories}        </ul>
        <input id="set-categories" type="submit" />
      </div>
      <div class="settings-item">
        <h2>Theme</h2>
{light}{dark}      <input id="set-theme" type="submit" />
      </div>
    </div>
  </body>
</html>
"#
    )
}

/// Landing page: a settings link, the answer toggle, and the theme toggle
/// for the configured local or cookie store.
pub fn render_home(view: &HomeView<'_>) -> String {
    let root = view.root.attributes();
    let version = escape_html(view.version);
    let theme = view.theme.as_theme_name();
    let toggle = view.root.store.trigger();

    format!(
        r#"<!DOCTYPE html>
<html lang="en-US"{root}>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Trivia v{version}</title>
    <link rel="stylesheet" href="/css/{theme}.css" />
    <script type="module" src="/js/boot.js"></script>
  </head>
  <body>
    <p id="settings-link"><a href="/settings">Settings</a></p>
    <button id="{toggle}">Toggle theme</button>
    <p id="question">Which theme is this page using?</p>
    <button id="toggle-answer">Show Answer</button>
    <div id="answer"><p>{theme}</p></div>
  </body>
</html>
"#
    )
}
