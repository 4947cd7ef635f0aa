//! # client
//!
//! Browser side of the theme toggle, compiled to WebAssembly with the
//! `hydrate` feature. It implements the `prefs` host traits over `web-sys`
//! and binds click handlers to the page's fixed element ids.
//!
//! Without `hydrate` only the markup helpers in [`markup`] are built, which
//! keeps the decision logic testable natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | Element ids and pure helpers over attribute values |
//! | `browser` | `localStorage`, `document.cookie` and `:root` hosts (hydrate) |
//! | `bindings` | Click handler wiring (hydrate) |

pub mod markup;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod browser;

/// WASM entry point: install logging, then bind handlers once the DOM is
/// parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; theme controls not bound");
        return;
    };
    bindings::when_ready(&document, bindings::bind_all);
}
