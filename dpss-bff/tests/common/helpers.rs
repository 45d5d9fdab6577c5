//! Router construction and request helpers

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use dpss_bff::{BffState, create_router};
use dpss_core::config::{FrontendConfig, ServerConfig};
use dpss_core::infrastructure::ScanBackend;

pub fn app(backend: Arc<dyn ScanBackend>) -> Router {
    app_with(backend, FrontendConfig::default())
}

pub fn app_with(backend: Arc<dyn ScanBackend>, frontend: FrontendConfig) -> Router {
    app_with_server(backend, frontend, &ServerConfig::default())
}

pub fn app_with_server(
    backend: Arc<dyn ScanBackend>,
    frontend: FrontendConfig,
    server: &ServerConfig,
) -> Router {
    let state = BffState::new(backend, frontend);
    create_router(state, server)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, Value) {
    let body = fields
        .iter()
        .map(|(name, value)| format!("{name}={}", value.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str("--TESTBOUNDARY\r\n");
        body.push_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str("--TESTBOUNDARY--\r\n");

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "multipart/form-data; boundary=TESTBOUNDARY",
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Page body of a `base_page` component list.
pub fn page_components(components: &Value) -> &Vec<Value> {
    components
        .as_array()
        .and_then(|items| items.iter().find(|c| c["type"] == "Page"))
        .and_then(|page| page["components"].as_array())
        .unwrap()
}

/// First component of the given type inside the page body.
pub fn find_component<'a>(components: &'a Value, kind: &str) -> &'a Value {
    page_components(components)
        .iter()
        .find(|c| c["type"] == kind)
        .unwrap()
}
