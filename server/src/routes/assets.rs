//! Themed stylesheets and the bundle bootstrap script.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use prefs::{PaletteSet, Preference};

use crate::state::AppState;

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Rules shared by both themes; colours come from the `:root` variables.
/// Two-variable palettes only define `--foreground` and `--background`.
const BASE_CSS: &str = "\
html, body {
  background-color: var(--background);
  color: var(--content, var(--foreground));
}

a, h2 {
  color: var(--emphasis, var(--foreground));
}

.settings-item {
  background-color: var(--highlight, var(--background));
}

label {
  color: var(--comment, var(--foreground));
}

#answer {
  display: none;
}
";

/// Loads the WASM bundle; `#[wasm_bindgen(start)]` wires the page.
const BOOT_JS: &str = "import init from '/pkg/client.js';\ninit();\n";

/// Stylesheet for `darkMode.css` / `lightMode.css`, `None` for anything else.
pub fn theme_stylesheet(palettes: PaletteSet, name: &str) -> Option<String> {
    let theme = Preference::from_theme_name(name.strip_suffix(".css")?)?;
    let mut css = palettes.for_preference(theme).to_css();
    css.push('\n');
    css.push_str(BASE_CSS);
    Some(css)
}

/// `GET /css/{name}`
pub async fn stylesheet(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match theme_stylesheet(state.palette.palettes(), &name) {
        Some(css) => ([(CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `GET /js/boot.js`
pub async fn boot_script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], BOOT_JS)
}
