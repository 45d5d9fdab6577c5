//! Index page, rendering-client host page and unknown API paths

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

use dpss_core::config::FrontendConfig;

use crate::application::base_page;
use crate::domain::Components;
use crate::presentation::controllers::BffState;
use crate::presentation::models::ErrorResponse;

const PREBUILT_CDN: &str = "https://cdn.jsdelivr.net/npm/@pydantic/fastui-prebuilt";

/// GET /api/ - Landing page components
pub async fn index() -> Json<Components> {
    Json(base_page(Vec::new(), None))
}

/// Every path without a route.
///
/// Outside `/api` this is the HTML shell that boots the rendering client,
/// which then fetches `/api{path}` for the components of the page.
pub async fn fallback(State(state): State<BffState>, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return api_not_found(path);
    }
    Html(prebuilt_html(&state.frontend)).into_response()
}

fn api_not_found(path: &str) -> Response {
    tracing::debug!(path, "No component route");
    let body = ErrorResponse {
        code: "NOT_FOUND".to_string(),
        message: "No page at this path".to_string(),
        details: None,
        request_id: Uuid::new_v4(),
        timestamp: Utc::now(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub fn prebuilt_html(frontend: &FrontendConfig) -> String {
    let title = escape_html(&frontend.site_title);
    let assets = format!("{PREBUILT_CDN}@{}/dist/assets", frontend.prebuilt_version);

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script type="module" crossorigin src="{assets}/index.js"></script>
    <link rel="stylesheet" crossorigin href="{assets}/index.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
