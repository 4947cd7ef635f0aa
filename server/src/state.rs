//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after start-up: the category list, the cookie signing key,
//! cookie attributes, and the theme settings pages advertise to the browser. Preferences themselves live only in the client's
//! cookies.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use prefs::{InitPolicy, PaletteKind, StoreKind};
use rand::RngCore;
use sha2::{Digest, Sha512};

use crate::config::ServerConfig;
use crate::services::page::ThemeRoot;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Clone)]
pub struct AppState {
    /// Known categories, sorted.
    pub categories: Arc<Vec<String>>,
    pub key: Key,
    pub cookie_secure: bool,
    pub assets_dir: PathBuf,
    pub palette: PaletteKind,
    pub theme_init: Option<InitPolicy>,
    pub home_store: StoreKind,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            categories: Arc::new(config.categories.clone()),
            key: signing_key(config.cookie_secret.as_deref()),
            cookie_secure: config.cookie_secure,
            assets_dir: config.assets_dir.clone(),
            palette: config.palette,
            theme_init: config.theme_init,
            home_store: config.home_store,
        }
    }
}

impl AppState {
    /// Theme variant for pages whose toggle uses the configured home store.
    #[must_use]
    pub fn theme_root(&self) -> ThemeRoot {
        ThemeRoot { store: self.home_store, palette: self.palette, init: self.theme_init }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Cookie signing key: SHA-512 of the configured secret (stable across
/// restarts), or 64 random bytes.
#[must_use]
pub fn signing_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => {
            let mut bytes = [0u8; 64];
            rand::rng().fill_bytes(&mut bytes);
            Key::from(&bytes)
        }
    }
}
