//! Scan configuration and project controllers

use axum::{
    Json,
    extract::State,
    response::Response,
};
use tracing::debug;

use crate::application::scanner::{SCAN_CONFIG_PAGE_SIZE, SCAN_CONFIGS_PAGE_SIZE};
use crate::domain::Components;
use crate::presentation::controllers::BffState;
use crate::presentation::extractors::{ApiPath, ApiQuery, SubmittedForm};
use crate::presentation::models::PageQuery;

/// GET /api/scan/configs - Scan configurations
pub async fn list_scan_configs(
    State(state): State<BffState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Components>, Response> {
    let page = query
        .page_request(SCAN_CONFIGS_PAGE_SIZE)
        .map_err(|e| state.error_response(e))?;

    state
        .scanner
        .scan_configs_view(page)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/scan/configs/add - New configuration form
pub async fn add_scan_config_form(State(state): State<BffState>) -> Json<Components> {
    Json(state.scanner.add_scan_config_view())
}

/// POST /api/scan/configs/add - Create a configuration
pub async fn add_scan_config(
    State(state): State<BffState>,
    SubmittedForm(values): SubmittedForm,
) -> Result<Json<Components>, Response> {
    debug!(fields = values.len(), "Scan configuration form submitted");

    state
        .scanner
        .add_scan_config(&values)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/scan/configs/{conf_id} - Configuration with its projects
pub async fn get_scan_config(
    State(state): State<BffState>,
    ApiPath(conf_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Components>, Response> {
    let page = query
        .page_request(SCAN_CONFIG_PAGE_SIZE)
        .map_err(|e| state.error_response(e))?;

    state
        .scanner
        .scan_config_view(conf_id, page)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/scan/configs/{conf_id}/add_project - New project form
pub async fn add_project_form(
    State(state): State<BffState>,
    ApiPath(conf_id): ApiPath<i64>,
) -> Json<Components> {
    Json(state.scanner.add_project_view(conf_id))
}

/// POST /api/scan/configs/{conf_id}/add_project - Create a project
pub async fn add_project(
    State(state): State<BffState>,
    ApiPath(conf_id): ApiPath<i64>,
    SubmittedForm(values): SubmittedForm,
) -> Result<Json<Components>, Response> {
    state
        .scanner
        .add_project_config(conf_id, &values)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/scan/projects/{project_id} - Project detail
pub async fn get_project(
    State(state): State<BffState>,
    ApiPath(project_id): ApiPath<i64>,
) -> Result<Json<Components>, Response> {
    state
        .scanner
        .project_config_view(project_id)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// POST /api/scan/run/{conf_id} - Start a scan
pub async fn run_scan(
    State(state): State<BffState>,
    ApiPath(conf_id): ApiPath<i64>,
) -> Result<Json<Components>, Response> {
    state
        .scanner
        .start_config_scanner(conf_id)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}
