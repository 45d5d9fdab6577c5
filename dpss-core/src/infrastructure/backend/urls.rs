//! Backend URL construction

use crate::config::{BackendConfig, ReportPathStyle};

/// Builds backend URLs from the configured prefix. Pure string work.
#[derive(Debug, Clone)]
pub struct BackendUrls {
    base: String,
    report_path_style: ReportPathStyle,
}

impl BackendUrls {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base: config.base_url(),
            report_path_style: config.report_path_style,
        }
    }

    /// `{protocol}://{host}:{port}/{api_version}/{handler_path}`
    pub fn service_url(&self, handler_path: &str) -> String {
        format!("{}{}", self.base, handler_path.trim_start_matches('/'))
    }

    pub fn reports(&self) -> String {
        self.service_url("scan/reports")
    }

    pub fn report(&self, report_id: i64) -> String {
        match self.report_path_style {
            ReportPathStyle::ById => self.service_url(&format!("scan/reports/id/{report_id}")),
            ReportPathStyle::Flat => self.service_url(&format!("scan/reports/{report_id}")),
        }
    }

    pub fn vulnerabilities(&self) -> String {
        self.service_url("scan/vulners")
    }

    pub fn vulnerability(&self, vulner_id: &str) -> String {
        self.service_url(&format!("scan/vulners/{}", urlencoding::encode(vulner_id)))
    }

    pub fn scan_configs(&self) -> String {
        self.service_url("scan/confs/all")
    }

    pub fn scan_config(&self, conf_id: i64) -> String {
        self.service_url(&format!("scan/confs/id/{conf_id}"))
    }

    pub fn create_scan_config(&self) -> String {
        self.service_url("scan/confs")
    }

    pub fn create_project_config(&self) -> String {
        self.service_url("scan/projects")
    }

    pub fn project_config(&self, project_id: i64) -> String {
        self.service_url(&format!("scan/projects/{project_id}"))
    }

    pub fn run_scan(&self, conf_id: i64) -> String {
        self.service_url(&format!("scan/run/{conf_id}"))
    }
}
