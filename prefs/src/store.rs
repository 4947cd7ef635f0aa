//! Preference stores.
//!
//! DESIGN
//! ======
//! One capability, three backends. Local and cookie stores complete their
//! writes synchronously inside the async `write`; the remote store awaits a
//! POST to the theme endpoint followed by a cache-busting GET of the page so
//! that the reload that follows renders the new theme server-side.
//!
//! [`Refresh`] tells the controller how a written preference becomes
//! visible: restyle in place, or reload the page.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};

use crate::error::StoreError;
use crate::host::{CookieSource, KeyValueStorage, cookie_value};
use crate::preference::Preference;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Local storage key holding `light` / `dark`.
pub const MODE_KEY: &str = "mode";
/// Cookie holding `lightMode` / `darkMode`.
pub const THEME_COOKIE: &str = "colorTheme";
/// Written as a bare number of seconds rather than an HTTP date or
/// `Max-Age`; browsers ignore it and keep a session cookie.
pub const THEME_COOKIE_EXPIRES: &str = "31536000";

/// How a newly written preference reaches the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// The controller restyles the current page.
    InPlace,
    /// The server renders the theme; the controller reloads after writing.
    Reload,
}

/// Where the authoritative preference lives.
#[async_trait(?Send)]
pub trait PreferenceStore {
    /// Currently stored preference, `None` on first visit or when the stored
    /// value is not recognised.
    fn read(&self) -> Option<Preference>;

    /// Persist `preference`. On error the previously stored value is kept.
    async fn write(&mut self, preference: Preference) -> Result<(), StoreError>;

    fn refresh(&self) -> Refresh;
}

// =============================================================================
// LOCAL STORAGE
// =============================================================================

pub struct LocalStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> LocalStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStorage> PreferenceStore for LocalStore<S> {
    fn read(&self) -> Option<Preference> {
        self.storage.get_item(MODE_KEY).as_deref().and_then(Preference::from_mode)
    }

    async fn write(&mut self, preference: Preference) -> Result<(), StoreError> {
        self.storage.set_item(MODE_KEY, preference.as_mode())
    }

    fn refresh(&self) -> Refresh {
        Refresh::InPlace
    }
}

// =============================================================================
// COOKIE
// =============================================================================

pub struct CookieStore<C> {
    cookies: C,
}

impl<C: CookieSource> CookieStore<C> {
    pub fn new(cookies: C) -> Self {
        Self { cookies }
    }
}

/// The exact assignment written for `preference`.
#[must_use]
pub fn theme_cookie_assignment(preference: Preference) -> String {
    format!(
        "{THEME_COOKIE}={}; expires={THEME_COOKIE_EXPIRES}; path=/",
        preference.as_theme_name()
    )
}

#[async_trait(?Send)]
impl<C: CookieSource> PreferenceStore for CookieStore<C> {
    fn read(&self) -> Option<Preference> {
        let cookies = self.cookies.cookie_string();
        cookie_value(&cookies, THEME_COOKIE).and_then(Preference::from_theme_name)
    }

    async fn write(&mut self, preference: Preference) -> Result<(), StoreError> {
        self.cookies.set_cookie(&theme_cookie_assignment(preference))
    }

    fn refresh(&self) -> Refresh {
        Refresh::Reload
    }
}

// =============================================================================
// REMOTE
// =============================================================================

/// Server-persisted preference.
///
/// `base_url` is the page the controls live on (the browser's current URL);
/// the theme endpoint is `<base_url>/theme/<lightMode|darkMode>`. The
/// server's signed cookie is `HttpOnly`, so the preference the page was
/// rendered with has to be handed in by the caller.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    rendered: Option<Preference>,
}

impl RemoteStore {
    #[must_use]
    pub fn new(base_url: impl Into<String>, rendered: Option<Preference>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, rendered)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, rendered: Option<Preference>) -> Self {
        Self { client, base_url: base_url.into(), rendered }
    }

    #[must_use]
    pub fn theme_endpoint(&self, preference: Preference) -> String {
        format!("{}/theme/{}", self.base_url.trim_end_matches('/'), preference.as_theme_name())
    }

    /// Re-request the page bypassing caches so the reload that follows sees
    /// the server's new rendering. Failure here does not undo the write.
    async fn refetch_page(&self) {
        let result = self
            .client
            .get(&self.base_url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("cache-busting refetch of {} failed: {e}", self.base_url);
        }
    }
}

#[async_trait(?Send)]
impl PreferenceStore for RemoteStore {
    fn read(&self) -> Option<Preference> {
        self.rendered
    }

    async fn write(&mut self, preference: Preference) -> Result<(), StoreError> {
        let url = self.theme_endpoint(preference);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16() });
        }

        self.rendered = Some(preference);
        self.refetch_page().await;
        Ok(())
    }

    fn refresh(&self) -> Refresh {
        Refresh::Reload
    }
}
