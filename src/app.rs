//! Application setup and wiring

use std::sync::Arc;

use axum::Router;

use dpss_bff::{BffState, create_router};
use dpss_core::infrastructure::{HttpScanBackend, ScanBackend};
use dpss_core::{BackendError, Config};

/// Build the scanner backend client and the full router on top of it.
pub fn create_app(config: &Config) -> Result<Router, BackendError> {
    let backend: Arc<dyn ScanBackend> = Arc::new(HttpScanBackend::new(&config.backend)?);

    tracing::info!(
        backend = %config.backend.base_url(),
        report_path_style = ?config.backend.report_path_style,
        "Scanner backend client initialized"
    );

    let state = BffState::new(backend, config.frontend.clone());
    Ok(create_router(state, &config.server))
}
