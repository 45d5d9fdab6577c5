//! HTTP controllers

pub mod health;
pub mod landing;
pub mod reports;
pub mod scanner;
pub mod vulners;

use std::sync::Arc;

use axum::response::Response;

use dpss_core::config::FrontendConfig;
use dpss_core::infrastructure::ScanBackend;

use crate::application::{ReportsService, ScannerService, ViewError, VulnersService};
use crate::presentation::middleware::view_error_to_response;

/// Shared state of every handler
#[derive(Clone)]
pub struct BffState {
    pub reports: Arc<ReportsService>,
    pub vulners: Arc<VulnersService>,
    pub scanner: Arc<ScannerService>,
    pub frontend: Arc<FrontendConfig>,
}

impl BffState {
    pub fn new(backend: Arc<dyn ScanBackend>, frontend: FrontendConfig) -> Self {
        Self {
            reports: Arc::new(ReportsService::new(backend.clone())),
            vulners: Arc::new(VulnersService::new(backend.clone())),
            scanner: Arc::new(ScannerService::new(backend)),
            frontend: Arc::new(frontend),
        }
    }

    pub fn error_response(&self, error: ViewError) -> Response {
        view_error_to_response(error, self.frontend.sanitize_errors)
    }
}
