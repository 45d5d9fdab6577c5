//! End-to-end tests: router, views and the HTTP backend client against a
//! mocked scanner backend

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::fixtures;
use common::helpers::{
    app, app_with, app_with_server, find_component, get_json, page_components, post_form,
    post_multipart, send,
};
use dpss_core::config::{BackendConfig, FrontendConfig, ServerConfig};
use dpss_core::infrastructure::HttpScanBackend;

fn http_backend(server: &MockServer) -> Arc<HttpScanBackend> {
    let address = server.address();
    let config = BackendConfig {
        host: address.ip().to_string(),
        port: address.port(),
        ..BackendConfig::default()
    };
    Arc::new(HttpScanBackend::new(&config).unwrap())
}

fn scan_config_json(id: i64) -> Value {
    serde_json::to_value(fixtures::scan_config(id)).unwrap()
}

#[tokio::test]
async fn test_scan_configs_pages_through_backend_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/confs/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(Value::Array((1..=9).map(scan_config_json).collect())),
        )
        .mount(&server)
        .await;

    let (status, first) = get_json(app(http_backend(&server)), "/api/scan/configs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first[0]["type"], "PageTitle");
    assert_eq!(first[0]["text"], "DPSS UI — Scan configurations");
    assert_eq!(
        find_component(&first, "Table")["data"].as_array().unwrap().len(),
        7
    );
    assert_eq!(find_component(&first, "Pagination")["total"], 9);

    let (status, second) =
        get_json(app(http_backend(&server)), "/api/scan/configs/?page=2").await;
    assert_eq!(status, StatusCode::OK);
    let data = find_component(&second, "Table")["data"].as_array().unwrap().clone();
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["id"]["onClick"]["url"], "/scan/configs/9");
    assert_eq!(data[1]["date"], "10.06.2025 14:14:07");
}

#[tokio::test]
async fn test_add_scan_config_posts_payload_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scan/confs"))
        .and(body_json(json!({
            "name": "lab",
            "host": "192.168.1.4",
            "user": "admin",
            "secret": "hunter2",
            "description": "",
            "port": "22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created_item_id": 17})))
        .expect(2)
        .mount(&server)
        .await;

    let fields = [
        ("name", "lab"),
        ("host", "192.168.1.4"),
        ("user", "admin"),
        ("password", "hunter2"),
        ("description", ""),
        ("port", "22"),
    ];
    let expected = json!([{"type": "FireEvent", "event": {"type": "go-to", "url": "/scan/configs/17"}}]);

    let (status, body) =
        post_multipart(app(http_backend(&server)), "/api/scan/configs/add", &fields).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    let (status, body) =
        post_form(app(http_backend(&server)), "/api/scan/configs/add", &fields).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_invalid_scan_config_form_is_422_without_backend_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scan/confs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created_item_id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        app(http_backend(&server)),
        "/api/scan/configs/add",
        &[("name", "lab"), ("host", "h"), ("user", "u"), ("password", "p"), ("port", "99999")],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["detail"]["form"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["loc"], json!(["port"]));
    assert_eq!(errors[0]["type"], "value_error");
}

#[tokio::test]
async fn test_add_project_form_and_submit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scan/projects"))
        .and(body_json(json!({
            "name": "api",
            "type": "javascript",
            "dir_path": "/srv/web",
            "description": "frontend",
            "scan_config_id": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created_item_id": 21})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, form_page) =
        get_json(app(http_backend(&server)), "/api/scan/configs/3/add_project").await;
    assert_eq!(status, StatusCode::OK);
    let form = find_component(&form_page, "ModelForm");
    assert_eq!(form["submitUrl"], "/api/scan/configs/3/add_project");
    assert_eq!(form["method"], "POST");

    let (status, body) = post_multipart(
        app(http_backend(&server)),
        "/api/scan/configs/3/add_project",
        &[
            ("name", "api"),
            ("type", "javascript"),
            ("dir_path", "/srv/web"),
            ("description", "frontend"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["event"]["url"], "/scan/projects/21");
}

#[tokio::test]
async fn test_blank_project_description_is_sent_as_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scan/projects"))
        .and(body_json(json!({
            "name": "api",
            "type": "python",
            "dir_path": "/srv",
            "description": "",
            "scan_config_id": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created_item_id": 6})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_multipart(
        app(http_backend(&server)),
        "/api/scan/configs/3/add_project",
        &[
            ("name", "api"),
            ("type", "python"),
            ("dir_path", "/srv"),
            ("description", ""),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["event"]["url"], "/scan/projects/6");
}

#[tokio::test]
async fn test_run_scan_fires_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scan/run/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created_item_id": 88})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(app(http_backend(&server)), "/api/scan/run/4", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"type": "FireEvent", "event": {"type": "back"}}]));
}

#[tokio::test]
async fn test_report_page_uses_by_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/reports/id/12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(
                serde_json::to_value(fixtures::full_report(12, &[None, Some(3.3)])).unwrap(),
            ),
        )
        .mount(&server)
        .await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/reports/12").await;

    assert_eq!(status, StatusCode::OK);
    let rows = find_component(&body, "Table")["data"].as_array().unwrap().clone();
    assert_eq!(rows[0]["score"], json!(3.3));
    assert!(rows[1].get("score").is_none());
}

#[tokio::test]
async fn test_vulners_listing_forwards_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/vulners"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vulners": [{"global_identifier": "BDU:2024-00042", "score": 9.1}],
            "count": 15
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/vulners/?page=2").await;

    assert_eq!(status, StatusCode::OK);
    let pagination = find_component(&body, "Pagination");
    assert_eq!(pagination, &json!({"type": "Pagination", "page": 2, "pageSize": 7, "total": 15}));
}

#[tokio::test]
async fn test_missing_vulner_is_single_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/vulners/BDU%3A404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/vulners/BDU:404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_object());
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn test_vulner_id_with_reserved_characters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/vulners/GHSA%2Fx%3Fy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::to_value(fixtures::vulnerability("GHSA/x?y", Some(5.0))).unwrap(),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) =
        get_json(app(http_backend(&server)), "/api/vulners/GHSA%2Fx%3Fy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["text"], "DPSS UI — Vulnerability: GHSA/x?y");
}

#[tokio::test]
async fn test_backend_down_is_bad_gateway() {
    let backend = Arc::new(
        HttpScanBackend::new(&BackendConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..BackendConfig::default()
        })
        .unwrap(),
    );

    let (status, body) = get_json(app(backend), "/api/reports/").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
    assert!(body["details"].is_object());
}

#[tokio::test]
async fn test_sanitized_errors_hide_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/confs/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("traceback"))
        .mount(&server)
        .await;

    let frontend = FrontendConfig {
        sanitize_errors: true,
        ..FrontendConfig::default()
    };
    let (status, body) =
        get_json(app_with(http_backend(&server), frontend), "/api/scan/configs").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_page_zero_is_bad_request() {
    let server = MockServer::start().await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/reports/?page=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_path_and_query_are_json_errors() {
    let server = MockServer::start().await;

    for uri in [
        "/api/reports/abc",
        "/api/reports/?page=abc",
        "/api/scan/configs?page=-1",
        "/api/scan/projects/x1",
        "/api/vulners/?page_size=lots",
    ] {
        let (status, body) = get_json(app(http_backend(&server)), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "BAD_REQUEST", "{uri}");
        assert!(body["request_id"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_slow_backend_hits_server_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/scan/reports"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let server_config = ServerConfig {
        request_timeout_seconds: 1,
        ..ServerConfig::default()
    };
    let app = app_with_server(http_backend(&server), FrontendConfig::default(), &server_config);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/reports/")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_landing_and_health() {
    let server = MockServer::start().await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["text"], "DPSS UI");
    assert_eq!(body[1]["type"], "Navbar");
    assert_eq!(page_components(&body)[0]["text"], "DPSS UI");

    let (status, body) = get_json(app(http_backend(&server)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_paths() {
    let server = MockServer::start().await;

    let (status, body) = get_json(app(http_backend(&server)), "/api/unknown/thing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let request = Request::builder()
        .method(Method::GET)
        .uri("/scan/configs/3")
        .body(Body::empty())
        .unwrap();
    let (status, html) = send(app(http_backend(&server)), request).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(html).unwrap();
    assert!(html.contains(r#"<div id="root"></div>"#));
    assert!(html.contains("fastui-prebuilt@0.0.23"));
}
