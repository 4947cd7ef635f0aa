//! Settings routes: the page plus the theme and category endpoints the
//! browser's remote preference store posts to.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_SECURITY_POLICY;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use prefs::{Preference, SelectedCategories};

use crate::routes::{PAGE_CSP, VERSION};
use crate::services::cookies::{
    CATEGORIES_COOKIE, SIGNED_THEME_COOKIE, THEME_COOKIE, enabled_categories, filter_known, preference_cookie,
    resolve_theme, script_cookie,
};
use crate::services::page::{SettingsView, render_settings};
use crate::state::AppState;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// `GET /settings`
pub async fn settings_page(State(state): State<AppState>, signed: SignedCookieJar, plain: CookieJar) -> Response {
    let theme = resolve_theme(&signed, &plain);
    let enabled = enabled_categories(&signed, &state.categories);
    let html = render_settings(&SettingsView {
        version: VERSION,
        theme,
        root: state.theme_root(),
        categories: &state.categories,
        enabled: &enabled,
    });
    ([(CONTENT_SECURITY_POLICY, PAGE_CSP)], Html(html)).into_response()
}

/// `POST /settings/theme/{theme}`: persist the theme as a signed cookie and
/// mirror it into the script-visible `colorTheme`.
pub async fn set_theme(
    State(state): State<AppState>,
    signed: SignedCookieJar,
    plain: CookieJar,
    Path(theme): Path<String>,
) -> Response {
    if Preference::from_theme_name(&theme).is_none() {
        tracing::warn!(%theme, "rejected unknown theme");
        return (StatusCode::BAD_REQUEST, "unknown theme\n").into_response();
    }

    tracing::info!(%theme, "theme preference set");
    let signed = signed.add(preference_cookie(SIGNED_THEME_COOKIE, theme.clone(), state.cookie_secure));
    let plain = plain.add(script_cookie(THEME_COOKIE, theme, state.cookie_secure));
    (signed, plain, format!("Set cookie for {THEME_COOKIE}.\n")).into_response()
}

/// `POST /settings/categories`: keep the known subset of the posted
/// selection as a signed cookie.
pub async fn set_categories(State(state): State<AppState>, jar: SignedCookieJar, body: Bytes) -> Response {
    let selected: SelectedCategories = match serde_json::from_slice(&body) {
        Ok(selected) => selected,
        Err(e) => {
            tracing::warn!(error = %e, "malformed category selection");
            return (StatusCode::BAD_REQUEST, "invalid category selection\n").into_response();
        }
    };

    let enabled = filter_known(&selected.categories, &state.categories);
    tracing::info!(selected = enabled.len(), total = state.categories.len(), "categories selected");

    let jar = jar.add(preference_cookie(CATEGORIES_COOKIE, enabled.join(","), state.cookie_secure));
    (jar, format!("Set cookie for {CATEGORIES_COOKIE}.\n")).into_response()
}
