use axum::body::{Body, to_bytes};
use axum::http::{Method, Request};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_state;

async fn get_path(path: &str) -> Response {
    app(test_state())
        .oneshot(Request::builder().method(Method::GET).uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn version_reports_package_version() {
    let resp = get_path("/version").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, format!("trivia v{VERSION}\n"));
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(get_path("/healthz").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn every_response_carries_security_headers() {
    for path in ["/version", "/css/missing.css"] {
        let resp = get_path(path).await;
        for (name, value) in SECURITY_HEADERS {
            assert_eq!(resp.headers().get(*name).and_then(|v| v.to_str().ok()), Some(*value), "{path} {name}");
        }
    }
}

#[tokio::test]
async fn stylesheet_route_serves_css() {
    let resp = get_path("/css/lightMode.css").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
    assert!(body_text(resp).await.contains("--background: #fdf6e3;"));
}

#[tokio::test]
async fn stylesheet_route_404s_unknown_theme() {
    assert_eq!(get_path("/css/sepiaMode.css").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn boot_script_imports_bundle() {
    let resp = get_path("/js/boot.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("/pkg/client.js"));
}

#[tokio::test]
async fn stylesheet_route_uses_configured_palette() {
    let state = crate::state::test_helpers::test_state_with(|config| config.palette = prefs::PaletteKind::Contrast);
    let resp = app(state)
        .oneshot(Request::builder().uri("/css/darkMode.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let css = body_text(resp).await;
    assert!(css.starts_with(":root {\n  --foreground: #ffffff;\n  --background: #000000;\n}"));
}
