//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing and settings pages, the two preference endpoints, themed
//! stylesheets, the browser bundle, and a version endpoint, all behind one Axum
//! router with request tracing and the standard security headers.

pub mod assets;
pub mod home;
pub mod settings;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::{HeaderName, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rendered pages load only same-origin styles and the WASM bundle.
pub const PAGE_CSP: &str = "default-src 'self'; script-src 'self' 'wasm-unsafe-eval';";

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("cross-origin-embedder-policy", "require-corp"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-site"),
    (
        "permissions-policy",
        "geolocation=(), midi=(), sync-xhr=(), microphone=(), camera=(), magnetometer=(), gyroscope=(), fullscreen=(), payment=()",
    ),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "1; mode=block"),
];

pub fn app(state: AppState) -> Router {
    let bundle = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/", get(home::home_page))
        .route("/settings", get(settings::settings_page))
        .route("/settings/theme/{theme}", post(settings::set_theme))
        .route("/settings/categories", post(settings::set_categories))
        .route("/css/{name}", get(assets::stylesheet))
        .route("/js/boot.js", get(assets::boot_script))
        .route("/version", get(version))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", bundle)
        .layer(middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn security_headers(req: Request, next: Next) -> Response {
    let mut resp = next.run(req).await;
    let headers = resp.headers_mut();
    for &(name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    resp
}

/// `GET /version`
async fn version() -> String {
    format!("trivia v{VERSION}\n")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
