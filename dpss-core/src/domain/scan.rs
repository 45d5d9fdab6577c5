//! Scan and project configurations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ecosystem a project is scanned as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Python,
    Golang,
    Javascript,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Python, Self::Golang, Self::Javascript];

    /// Wire value, as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Golang => "golang",
            Self::Javascript => "javascript",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Golang => "Go",
            Self::Javascript => "JavaScript",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project inside a scan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub dir_path: String,
    #[serde(default)]
    pub description: Option<String>,
    pub scan_config_id: i64,
}

/// Target host and credentials a scan runs against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub id: i64,
    pub name: String,
    pub host: String,
    pub user: String,
    pub secret: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp in `DD_MM_YYYY_HH_MM_SS` form.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

/// Payload for `POST scan/confs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewScanConfig {
    pub name: String,
    pub host: String,
    pub user: String,
    pub secret: String,
    /// Sent as `""` when left blank.
    pub description: String,
    pub port: Option<String>,
}

/// Payload for `POST scan/projects`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProjectConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub dir_path: String,
    /// Required by the backend; blank is `""`, never `null`.
    pub description: String,
    pub scan_config_id: i64,
}

/// Answer of every backend write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedItem {
    pub created_item_id: i64,
}
