//! Landing page hosting the answer toggle and the local or cookie theme
//! toggle.

use axum::extract::State;
use axum::http::header::CONTENT_SECURITY_POLICY;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};

use crate::routes::{PAGE_CSP, VERSION};
use crate::services::cookies::resolve_theme;
use crate::services::page::{HomeView, render_home};
use crate::state::AppState;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// `GET /`
pub async fn home_page(State(state): State<AppState>, signed: SignedCookieJar, plain: CookieJar) -> Response {
    let theme = resolve_theme(&signed, &plain);
    let html = render_home(&HomeView { version: VERSION, theme, root: state.theme_root() });
    ([(CONTENT_SECURITY_POLICY, PAGE_CSP)], Html(html)).into_response()
}
