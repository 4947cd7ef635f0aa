//! `web-sys` implementations of the `prefs` host traits.

use prefs::StoreError;
use prefs::host::{CookieSource, KeyValueStorage, Page};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlElement, Location, Storage};

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// `None` when storage is unavailable (privacy mode, sandboxed frame).
    pub fn local() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(js_message(&e)))
    }
}

/// `document.cookie`.
pub struct BrowserCookies {
    document: HtmlDocument,
}

impl BrowserCookies {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()?;
        Some(Self { document })
    }
}

impl CookieSource for BrowserCookies {
    fn cookie_string(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError> {
        self.document
            .set_cookie(assignment)
            .map_err(|e| StoreError::Storage(js_message(&e)))
    }
}

/// The `:root` element plus the window location used for reloads.
pub struct BrowserPage {
    root: HtmlElement,
    location: Location,
}

impl BrowserPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?.dyn_into::<HtmlElement>().ok()?;
        Some(Self { root, location: window.location() })
    }

    /// Absolute URL of the current page.
    pub fn href(&self) -> Option<String> {
        self.location.href().ok()
    }
}

impl Page for BrowserPage {
    fn set_style_property(&self, name: &str, value: &str) {
        let _ = self.root.style().set_property(name, value);
    }

    fn reload(&self) {
        if let Err(e) = self.location.reload() {
            log::warn!("page reload failed: {}", js_message(&e));
        }
    }
}
