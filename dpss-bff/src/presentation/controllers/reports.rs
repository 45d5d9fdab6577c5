//! Report controllers

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::application::reports::{REPORT_PAGE_SIZE, REPORTS_PAGE_SIZE};
use crate::domain::Components;
use crate::presentation::controllers::BffState;
use crate::presentation::extractors::{ApiPath, ApiQuery};
use crate::presentation::models::PageQuery;

/// GET /api/reports/ - Collected reports
pub async fn list_reports(
    State(state): State<BffState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Components>, Response> {
    let page = query
        .page_request(REPORTS_PAGE_SIZE)
        .map_err(|e| state.error_response(e))?;

    state
        .reports
        .reports_view(page)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/reports/{report_id} - Findings of one report
pub async fn get_report(
    State(state): State<BffState>,
    ApiPath(report_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Components>, Response> {
    let page = query
        .page_request(REPORT_PAGE_SIZE)
        .map_err(|e| state.error_response(e))?;

    state
        .reports
        .report_view(report_id, page)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}
