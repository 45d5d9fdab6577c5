//! Scan reports

use serde::{Deserialize, Serialize};

use super::scan::{ProjectConfig, ScanConfig};
use super::vulnerability::{Affected, Vulnerability};

/// Report as it appears in the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    /// Creation timestamp in `DD_MM_YYYY_HH_MM_SS` form.
    #[serde(default)]
    pub created_at: Option<String>,
    pub scan_config_id: i64,
}

/// One vulnerable package found in a project, with the vulnerability it matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAffect {
    pub affected: Affected,
    pub vulner: Vulnerability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportProjectAffects {
    pub project: ProjectConfig,
    #[serde(default)]
    pub affects: Vec<ReportAffect>,
}

/// Report with every finding and the scan configuration it ran with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFull {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    pub scan_config_id: i64,
    pub affects_projects: Vec<ReportProjectAffects>,
    pub scan_config: ScanConfig,
}
