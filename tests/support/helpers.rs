// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use content_core::application::ports::{time::Clock, util::SlugGenerator};
use content_core::application::services::ApplicationServices;
use content_core::domain::seo::SiteSettings;
use content_core::infrastructure::util::DefaultSlugGenerator;
use content_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn test_site() -> SiteSettings {
    let mut site = SiteSettings::new("https://example.com", "Example Blog");
    site.description = "Articles about building things".into();
    site.logo_url = Some("/logo.png".into());
    site.twitter_handle = Some("@exampleblog".into());
    site
}

pub fn build_test_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = Arc::new(ApplicationServices::new(test_site(), clock, slugger));
    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    json_request(Method::POST, uri, payload)
}

/// Read a response body as JSON, asserting the content type on the way.
pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
/// Returns the parsed body so callers can inspect `details`.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
