//! Infrastructure layer - external integrations

pub mod backend;

pub use backend::{BackendUrls, HttpScanBackend, ScanBackend};
