//! Signed preference cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is the remote preference store: it keeps nothing itself and
//! persists the theme and category selection as signed, `HttpOnly` cookies
//! that the next page render reads back.
//!
//! The page script's cookie store owns `colorTheme` and must be able to read
//! and overwrite it, so the signed theme lives under its own name and the
//! theme endpoint mirrors the value into a script-visible `colorTheme`.
//! Whichever side wrote last is what `colorTheme` holds.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite, SignedCookieJar};
use prefs::Preference;
use time::Duration;

pub use prefs::store::THEME_COOKIE;

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Signed, `HttpOnly` copy of the theme set through the settings endpoint.
pub const SIGNED_THEME_COOKIE: &str = "themePreference";
pub const CATEGORIES_COOKIE: &str = "enabledCategories";
/// One Gregorian year.
pub const COOKIE_MAX_AGE_SECS: i64 = 31_556_952;

/// Long-lived, root-scoped, script-inaccessible preference cookie.
pub fn preference_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .build()
}

/// Same attributes as [`preference_cookie`] but readable and writable from
/// page script.
pub fn script_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = preference_cookie(name, value, secure);
    cookie.set_http_only(false);
    cookie
}

/// Theme the next render should use.
///
/// A recognised `colorTheme` (written by the page script or mirrored by the
/// theme endpoint) wins; the signed cookie covers clients that dropped it.
/// Anything but `lightMode` renders dark.
pub fn resolve_theme(signed: &SignedCookieJar, plain: &CookieJar) -> Preference {
    let script = plain
        .get(THEME_COOKIE)
        .and_then(|cookie| Preference::from_theme_name(cookie.value()));
    let stored = script.or_else(|| {
        signed
            .get(SIGNED_THEME_COOKIE)
            .and_then(|cookie| Preference::from_theme_name(cookie.value()))
    });
    Preference::resolve(stored)
}

/// Categories enabled for this client; all of them when nothing (or an
/// empty selection) is stored.
pub fn enabled_categories(signed: &SignedCookieJar, all: &[String]) -> Vec<String> {
    match signed.get(CATEGORIES_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().split(',').map(str::to_owned).collect(),
        _ => all.to_vec(),
    }
}

/// Requested names that are known, in request order.
pub fn filter_known(requested: &[String], known: &[String]) -> Vec<String> {
    requested.iter().filter(|name| known.contains(name)).cloned().collect()
}
