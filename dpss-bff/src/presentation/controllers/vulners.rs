//! Vulnerability knowledge base controllers

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::application::vulners::VULNERS_PAGE_SIZE;
use crate::domain::Components;
use crate::presentation::controllers::BffState;
use crate::presentation::extractors::{ApiPath, ApiQuery};
use crate::presentation::models::PageQuery;

/// GET /api/vulners/ - Knowledge base, paged by the backend
pub async fn list_vulners(
    State(state): State<BffState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Components>, Response> {
    let page = query
        .page_request(VULNERS_PAGE_SIZE)
        .map_err(|e| state.error_response(e))?;

    state
        .vulners
        .vulners_view(page)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}

/// GET /api/vulners/{item_id} - One vulnerability record
pub async fn get_vulner(
    State(state): State<BffState>,
    ApiPath(item_id): ApiPath<String>,
) -> Result<Json<Components>, Response> {
    state
        .vulners
        .vulner_view(&item_id)
        .await
        .map(Json)
        .map_err(|e| state.error_response(e))
}
