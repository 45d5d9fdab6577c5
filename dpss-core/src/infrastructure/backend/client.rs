//! reqwest implementation of [`ScanBackend`]

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::{BackendUrls, ScanBackend};
use crate::application::errors::BackendError;
use crate::config::BackendConfig;
use crate::domain::{
    CreatedItem, NewProjectConfig, NewScanConfig, ProjectConfig, Report, ReportFull, ScanConfig,
    Vulnerability, VulnerabilityPage,
};

const USER_AGENT: &str = concat!("dpss-ui/", env!("CARGO_PKG_VERSION"));

/// Longest upstream error body carried into a [`BackendError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Scanner backend client over a pooled HTTP connection
#[derive(Debug, Clone)]
pub struct HttpScanBackend {
    client: Client,
    urls: BackendUrls,
}

impl HttpScanBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self::with_client(client, config))
    }

    /// Use an already configured client, e.g. one shared with other components.
    pub fn with_client(client: Client, config: &BackendConfig) -> Self {
        Self {
            client,
            urls: BackendUrls::new(config),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, u32)],
    ) -> Result<T, BackendError> {
        debug!(%url, ?query, "GET backend");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&url, e))?;

        decode(url, response).await
    }

    async fn post_json<B, T>(&self, url: String, body: Option<&B>) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(%url, "POST backend");

        let mut request = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&url, e))?;

        decode(url, response).await
    }
}

/// Check the status first, then validate the body against `T`.
async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T, BackendError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        debug!(%url, "Backend resource not found");
        return Err(BackendError::NotFound { url });
    }

    let body = response
        .text()
        .await
        .map_err(|e| BackendError::from_reqwest(&url, e))?;

    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "Backend returned an error status");
        return Err(BackendError::Status {
            url,
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    serde_json::from_str(&body).map_err(|source| {
        warn!(%url, error = %source, "Backend response does not match the expected shape");
        BackendError::Contract { url, source }
    })
}

#[async_trait]
impl ScanBackend for HttpScanBackend {
    async fn list_reports(&self) -> Result<Vec<Report>, BackendError> {
        self.get_json(self.urls.reports(), &[]).await
    }

    async fn get_report(&self, report_id: i64) -> Result<ReportFull, BackendError> {
        self.get_json(self.urls.report(report_id), &[]).await
    }

    async fn list_vulnerabilities(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<VulnerabilityPage, BackendError> {
        self.get_json(
            self.urls.vulnerabilities(),
            &[("page", page), ("page_size", page_size)],
        )
        .await
    }

    async fn get_vulnerability(&self, vulner_id: &str) -> Result<Vulnerability, BackendError> {
        self.get_json(self.urls.vulnerability(vulner_id), &[]).await
    }

    async fn list_scan_configs(&self) -> Result<Vec<ScanConfig>, BackendError> {
        self.get_json(self.urls.scan_configs(), &[]).await
    }

    async fn get_scan_config(&self, conf_id: i64) -> Result<ScanConfig, BackendError> {
        self.get_json(self.urls.scan_config(conf_id), &[]).await
    }

    async fn create_scan_config(
        &self,
        config: &NewScanConfig,
    ) -> Result<CreatedItem, BackendError> {
        self.post_json(self.urls.create_scan_config(), Some(config))
            .await
    }

    async fn get_project_config(&self, project_id: i64) -> Result<ProjectConfig, BackendError> {
        self.get_json(self.urls.project_config(project_id), &[]).await
    }

    async fn create_project_config(
        &self,
        project: &NewProjectConfig,
    ) -> Result<CreatedItem, BackendError> {
        self.post_json(self.urls.create_project_config(), Some(project))
            .await
    }

    async fn run_scan(&self, conf_id: i64) -> Result<CreatedItem, BackendError> {
        self.post_json::<(), _>(self.urls.run_scan(conf_id), None)
            .await
    }
}
