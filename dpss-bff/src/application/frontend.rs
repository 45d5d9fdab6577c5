//! URLs of the UI itself
//!
//! Page URLs are what the client navigates to; `/api/...` URLs are where it
//! loads components and submits forms.

pub const INDEX: &str = "/";
pub const REPORTS: &str = "/reports/";
pub const SCAN_CONFIGS: &str = "/scan/configs";
pub const VULNERS: &str = "/vulners/";
pub const ADD_SCAN_CONFIG: &str = "/scan/configs/add";
pub const SUBMIT_ADD_SCAN_CONFIG: &str = "/api/scan/configs/add";

pub fn report(report_id: i64) -> String {
    format!("/reports/{report_id}")
}

pub fn scan_config(conf_id: i64) -> String {
    format!("/scan/configs/{conf_id}")
}

pub fn project_config(project_id: i64) -> String {
    format!("/scan/projects/{project_id}")
}

pub fn vulner(vulner_id: &str) -> String {
    format!("/vulners/{}", urlencoding::encode(vulner_id))
}

pub fn add_project(conf_id: i64) -> String {
    format!("/scan/configs/{conf_id}/add_project")
}

pub fn submit_add_project(conf_id: i64) -> String {
    format!("/api/scan/configs/{conf_id}/add_project")
}

pub fn submit_run_scan(conf_id: i64) -> String {
    format!("/api/scan/run/{conf_id}")
}
