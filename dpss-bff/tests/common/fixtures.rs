//! Test data fixtures and an in-process scanner backend

use std::sync::Mutex;

use async_trait::async_trait;

use dpss_core::BackendError;
use dpss_core::domain::{
    Affected, CreatedItem, NewProjectConfig, NewScanConfig, ProjectConfig, ProjectType, Rating,
    Report, ReportAffect, ReportFull, ReportProjectAffects, ScanConfig, Vulnerability,
    VulnerabilityPage, VulnerabilitySummary,
};
use dpss_core::infrastructure::ScanBackend;

pub fn scan_config(id: i64) -> ScanConfig {
    ScanConfig {
        id,
        name: format!("config-{id}"),
        host: format!("10.0.0.{id}"),
        user: "scanner".to_string(),
        secret: "s3cr3t".to_string(),
        description: Some("nightly scan".to_string()),
        date: Some("10_06_2025_14_14_07".to_string()),
        port: None,
        projects: Vec::new(),
    }
}

pub fn project(id: i64, scan_config_id: i64) -> ProjectConfig {
    ProjectConfig {
        id,
        name: format!("project-{id}"),
        project_type: ProjectType::Python,
        dir_path: format!("/srv/project-{id}"),
        description: None,
        scan_config_id,
    }
}

pub fn report(id: i64, scan_config_id: i64) -> Report {
    Report {
        id,
        created_at: Some("01_02_2025_03_04_05".to_string()),
        scan_config_id,
    }
}

pub fn affected(name: &str) -> Affected {
    Affected {
        id: 1,
        name: name.to_string(),
        vendor: "vendor".to_string(),
        package_type: "pypi".to_string(),
        start_condition: "gte".to_string(),
        start_value: "1.0".to_string(),
        end_condition: "lt".to_string(),
        end_value: "2.0".to_string(),
    }
}

pub fn rating(score: f64) -> Rating {
    Rating {
        id: 1,
        method: "CVSS".to_string(),
        score,
        severity: if score >= 7.0 { "HIGH" } else { "MEDIUM" }.to_string(),
        source_name: "NVD".to_string(),
        source_url: "https://nvd.nist.gov".to_string(),
        vector: "AV:N/AC:L".to_string(),
        version: 3.1,
    }
}

pub fn vulnerability(global_identifier: &str, score: Option<f64>) -> Vulnerability {
    Vulnerability {
        global_identifier: global_identifier.to_string(),
        identifier: Some(format!("CVE-{global_identifier}")),
        description: Some("Remote code execution".to_string()),
        source_name: Some("NVD".to_string()),
        source_url: Some("https://nvd.nist.gov".to_string()),
        affected: vec![affected("requests")],
        ratings: score.map(rating).into_iter().collect(),
        references: Vec::new(),
    }
}

/// Report whose single project has one finding per given score.
pub fn full_report(id: i64, scores: &[Option<f64>]) -> ReportFull {
    let config = scan_config(4);
    let affects = scores
        .iter()
        .enumerate()
        .map(|(i, score)| ReportAffect {
            affected: affected(&format!("pkg-{i}")),
            vulner: vulnerability(&format!("BDU:2025-{i}"), *score),
        })
        .collect();

    ReportFull {
        id,
        created_at: Some("10_06_2025_14_14_07".to_string()),
        scan_config_id: config.id,
        affects_projects: vec![ReportProjectAffects {
            project: project(1, config.id),
            affects,
        }],
        scan_config: config,
    }
}

pub fn vulner_summary(global_identifier: &str) -> VulnerabilitySummary {
    VulnerabilitySummary {
        global_identifier: global_identifier.to_string(),
        identifier: None,
        source_name: Some("NVD".to_string()),
        source_url: Some("https://nvd.nist.gov".to_string()),
        score: Some(5.0),
        severity: Some("MEDIUM".to_string()),
    }
}

/// Canned backend answers plus a record of every write
#[derive(Default)]
pub struct MockBackend {
    pub reports: Vec<Report>,
    pub full_reports: Vec<ReportFull>,
    pub vulner_page: Option<VulnerabilityPage>,
    pub vulners: Vec<Vulnerability>,
    pub configs: Vec<ScanConfig>,
    pub projects: Vec<ProjectConfig>,
    pub created_id: i64,
    pub created_configs: Mutex<Vec<NewScanConfig>>,
    pub created_projects: Mutex<Vec<NewProjectConfig>>,
    pub vulner_page_requests: Mutex<Vec<(u32, u32)>>,
    pub scans_started: Mutex<Vec<i64>>,
}

fn not_found(what: String) -> BackendError {
    BackendError::NotFound { url: what }
}

#[async_trait]
impl ScanBackend for MockBackend {
    async fn list_reports(&self) -> Result<Vec<Report>, BackendError> {
        Ok(self.reports.clone())
    }

    async fn get_report(&self, report_id: i64) -> Result<ReportFull, BackendError> {
        self.full_reports
            .iter()
            .find(|r| r.id == report_id)
            .cloned()
            .ok_or_else(|| not_found(format!("report {report_id}")))
    }

    async fn list_vulnerabilities(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<VulnerabilityPage, BackendError> {
        self.vulner_page_requests.lock().unwrap().push((page, page_size));
        self.vulner_page
            .clone()
            .ok_or_else(|| not_found("vulners".to_string()))
    }

    async fn get_vulnerability(&self, vulner_id: &str) -> Result<Vulnerability, BackendError> {
        self.vulners
            .iter()
            .find(|v| v.global_identifier == vulner_id)
            .cloned()
            .ok_or_else(|| not_found(format!("vulner {vulner_id}")))
    }

    async fn list_scan_configs(&self) -> Result<Vec<ScanConfig>, BackendError> {
        Ok(self.configs.clone())
    }

    async fn get_scan_config(&self, conf_id: i64) -> Result<ScanConfig, BackendError> {
        self.configs
            .iter()
            .find(|c| c.id == conf_id)
            .cloned()
            .ok_or_else(|| not_found(format!("config {conf_id}")))
    }

    async fn create_scan_config(
        &self,
        config: &NewScanConfig,
    ) -> Result<CreatedItem, BackendError> {
        self.created_configs.lock().unwrap().push(config.clone());
        Ok(CreatedItem {
            created_item_id: self.created_id,
        })
    }

    async fn get_project_config(&self, project_id: i64) -> Result<ProjectConfig, BackendError> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| not_found(format!("project {project_id}")))
    }

    async fn create_project_config(
        &self,
        project: &NewProjectConfig,
    ) -> Result<CreatedItem, BackendError> {
        self.created_projects.lock().unwrap().push(project.clone());
        Ok(CreatedItem {
            created_item_id: self.created_id,
        })
    }

    async fn run_scan(&self, conf_id: i64) -> Result<CreatedItem, BackendError> {
        self.scans_started.lock().unwrap().push(conf_id);
        Ok(CreatedItem {
            created_item_id: self.created_id,
        })
    }
}
