//! Route definitions

use std::time::Duration;

use axum::{
    Router,
    http::{Method, StatusCode, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use dpss_core::config::ServerConfig;

use crate::presentation::controllers::{
    BffState,
    health::health_check,
    landing::{fallback, index},
    reports::{get_report, list_reports},
    scanner::{
        add_project, add_project_form, add_scan_config, add_scan_config_form, get_project,
        get_scan_config, list_scan_configs, run_scan,
    },
    vulners::{get_vulner, list_vulners},
};
use crate::presentation::middleware::logging_middleware;

/// Component routes under `/api`. Every handler answers with a JSON
/// component list.
fn api_routes() -> Router<BffState> {
    Router::new()
        .route("/api", get(index))
        .route("/api/", get(index))
        .route("/api/reports", get(list_reports))
        .route("/api/reports/", get(list_reports))
        .route("/api/reports/{report_id}", get(get_report))
        .route("/api/vulners", get(list_vulners))
        .route("/api/vulners/", get(list_vulners))
        .route("/api/vulners/{item_id}", get(get_vulner))
        .route("/api/scan/configs", get(list_scan_configs))
        .route("/api/scan/configs/", get(list_scan_configs))
        .route(
            "/api/scan/configs/add",
            get(add_scan_config_form).post(add_scan_config),
        )
        .route("/api/scan/configs/{conf_id}", get(get_scan_config))
        .route(
            "/api/scan/configs/{conf_id}/add_project",
            get(add_project_form).post(add_project),
        )
        .route("/api/scan/projects/{project_id}", get(get_project))
        .route("/api/scan/run/{conf_id}", post(run_scan))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<header::HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                header::HeaderValue::from_str(origin)
                    .map_err(|_| {
                        tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                    })
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

pub fn create_router(state: BffState, server: &ServerConfig) -> Router {
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ))
        .layer(middleware::from_fn(logging_middleware));

    Router::new()
        .merge(api_routes())
        .route("/health", get(health_check))
        // Unknown `/api` paths get a JSON 404, every other path the client host page.
        .fallback(fallback)
        .layer(service_builder)
        .with_state(state)
}
