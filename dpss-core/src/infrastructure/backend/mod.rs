//! Scanner backend access
//!
//! [`ScanBackend`] is the seam view services depend on. [`HttpScanBackend`]
//! is the production implementation; tests substitute in-process doubles.

mod client;
mod urls;

pub use client::HttpScanBackend;
pub use urls::BackendUrls;

use async_trait::async_trait;

use crate::application::errors::BackendError;
use crate::domain::{
    CreatedItem, NewProjectConfig, NewScanConfig, ProjectConfig, Report, ReportFull, ScanConfig,
    Vulnerability, VulnerabilityPage,
};

/// Operations the scanner backend exposes
#[async_trait]
pub trait ScanBackend: Send + Sync {
    async fn list_reports(&self) -> Result<Vec<Report>, BackendError>;

    async fn get_report(&self, report_id: i64) -> Result<ReportFull, BackendError>;

    /// One page of the knowledge base; the backend does the paging.
    async fn list_vulnerabilities(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<VulnerabilityPage, BackendError>;

    async fn get_vulnerability(&self, vulner_id: &str) -> Result<Vulnerability, BackendError>;

    async fn list_scan_configs(&self) -> Result<Vec<ScanConfig>, BackendError>;

    async fn get_scan_config(&self, conf_id: i64) -> Result<ScanConfig, BackendError>;

    async fn create_scan_config(&self, config: &NewScanConfig)
    -> Result<CreatedItem, BackendError>;

    async fn get_project_config(&self, project_id: i64) -> Result<ProjectConfig, BackendError>;

    async fn create_project_config(
        &self,
        project: &NewProjectConfig,
    ) -> Result<CreatedItem, BackendError>;

    /// Start a scan for a configuration. The created item is the new report.
    async fn run_scan(&self, conf_id: i64) -> Result<CreatedItem, BackendError>;
}
