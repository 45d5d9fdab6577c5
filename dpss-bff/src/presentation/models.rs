//! HTTP request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{PageRequest, ViewResult};
use crate::domain::FormError;

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Underlying error, omitted when errors are sanitized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// `{"detail": {"form": [...]}}`, the body the client reads field errors from
#[derive(Debug, Serialize)]
pub struct FormErrorResponse {
    pub detail: FormErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct FormErrorDetail {
    pub form: Vec<FormError>,
}

impl FormErrorResponse {
    pub fn new(form: Vec<FormError>) -> Self {
        Self {
            detail: FormErrorDetail { form },
        }
    }
}

/// `?page=&page_size=` on listing routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn page_request(&self, default_page_size: u32) -> ViewResult<PageRequest> {
        PageRequest::from_query(self.page, self.page_size, default_page_size)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
