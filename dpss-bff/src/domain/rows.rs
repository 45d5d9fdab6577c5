//! Table-row DTOs
//!
//! One struct per table. Identifier and URL fields are pre-built links, so
//! the client renders them as navigable cells.

use serde::Serialize;

use super::components::Link;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub report_id: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub scan_conf_id: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanConfigRow {
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub id: Link,
    pub name: String,
    pub host: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRow {
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub id: Link,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub dir_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Affected package of a report, joined with the vulnerability it matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectWithVulnerRow {
    pub name: String,
    pub vendor: String,
    #[serde(rename = "type")]
    pub package_type: String,
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub vulner: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectWithIntervalRow {
    pub name: String,
    pub vendor: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub interval: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VulnerSummaryRow {
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub global_identifier: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::domain::components::tagged::optional_link"
    )]
    pub source_url: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRow {
    pub score: f64,
    pub severity: String,
    pub vector: String,
    pub source_name: String,
    #[serde(serialize_with = "crate::domain::components::tagged::link")]
    pub source_url: Link,
}

/// Any row a [`Table`](super::components::Table) can hold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableRow {
    Report(ReportRow),
    ScanConfig(ScanConfigRow),
    Project(ProjectRow),
    AffectWithVulner(AffectWithVulnerRow),
    AffectWithInterval(AffectWithIntervalRow),
    VulnerSummary(VulnerSummaryRow),
    Rating(RatingRow),
}

macro_rules! impl_into_row {
    ($($row:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$row> for TableRow {
                fn from(row: $row) -> Self {
                    TableRow::$variant(row)
                }
            }
        )*
    };
}

impl_into_row! {
    ReportRow => Report,
    ScanConfigRow => ScanConfig,
    ProjectRow => Project,
    AffectWithVulnerRow => AffectWithVulner,
    AffectWithIntervalRow => AffectWithInterval,
    VulnerSummaryRow => VulnerSummary,
    RatingRow => Rating,
}
