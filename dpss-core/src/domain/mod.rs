//! Shapes of the scanner backend's JSON
//!
//! Every type here is deserialized straight from a backend response. A
//! missing required field fails the whole response; optional fields fall back
//! to `None` or an empty collection.

pub mod report;
pub mod scan;
pub mod vulnerability;

pub use report::{Report, ReportAffect, ReportFull, ReportProjectAffects};
pub use scan::{CreatedItem, NewProjectConfig, NewScanConfig, ProjectConfig, ProjectType, ScanConfig};
pub use vulnerability::{
    Affected, Rating, Reference, Vulnerability, VulnerabilityPage, VulnerabilitySummary,
};
