//! HTTP middleware and error mapping

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use uuid::Uuid;

use dpss_core::BackendError;

use crate::application::ViewError;
use crate::presentation::models::{ErrorResponse, FormErrorResponse};

/// Convert a [`ViewError`] to an HTTP response.
///
/// Form errors go back in the client's own 422 shape; everything else uses
/// [`ErrorResponse`].
pub fn view_error_to_response(error: ViewError, sanitize_errors: bool) -> Response {
    let (status, code, message) = match &error {
        ViewError::InvalidForm(errors) => {
            tracing::warn!(
                invalid_fields = errors.len(),
                "Form submission rejected"
            );
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormErrorResponse::new(errors.clone())),
            )
                .into_response();
        }
        ViewError::BadRequest { .. } => {
            (StatusCode::BAD_REQUEST, "BAD_REQUEST", "Invalid request parameters")
        }
        ViewError::Backend(backend) => match backend {
            BackendError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
            }
            BackendError::Timeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "Scanner backend did not answer in time",
            ),
            BackendError::Transport { .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                "Scanner backend is unavailable",
            ),
            BackendError::Status { .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Scanner backend returned an error",
            ),
            BackendError::Contract { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "BAD_UPSTREAM_CONTRACT",
                "Scanner backend returned an unexpected response",
            ),
            BackendError::ClientBuild(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        },
    };

    if status.is_server_error() {
        tracing::error!(
            error = %error,
            http_status = %status,
            error_code = code,
            "View error mapped to HTTP response"
        );
    } else {
        tracing::warn!(
            error = %error,
            http_status = %status,
            error_code = code,
            "View error mapped to HTTP response"
        );
    }

    let error_response = ErrorResponse {
        code: code.to_string(),
        message: message.to_string(),
        details: if sanitize_errors {
            None
        } else {
            Some(serde_json::json!({ "error": error.to_string() }))
        },
        request_id: Uuid::new_v4(),
        timestamp: Utc::now(),
    };

    (status, Json(error_response)).into_response()
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
