//! Report pages

use std::sync::Arc;

use tracing::debug;

use dpss_core::domain::{Report, ReportFull, ReportProjectAffects};
use dpss_core::infrastructure::ScanBackend;

use crate::domain::rows::{AffectWithVulnerRow, ReportRow};
use crate::domain::{Component, Components, DisplayLookup, Link, Table};

use super::errors::ViewResult;
use super::frontend;
use super::page::base_page;
use super::pagination::PageRequest;
use super::transform::{fix_date_string, gen_link};

pub const REPORTS_PAGE_SIZE: u32 = 10;
pub const REPORT_PAGE_SIZE: u32 = 10;

pub struct ReportsService {
    backend: Arc<dyn ScanBackend>,
}

impl ReportsService {
    pub fn new(backend: Arc<dyn ScanBackend>) -> Self {
        Self { backend }
    }

    pub async fn reports_info(&self) -> ViewResult<Vec<Report>> {
        Ok(self.backend.list_reports().await?)
    }

    pub async fn reports_view(&self, page: PageRequest) -> ViewResult<Components> {
        let reports = self.reports_info().await?;
        debug!(count = reports.len(), page = page.page(), "Rendering report list");

        let rows: Vec<ReportRow> = reports.iter().map(report_row).collect();

        let components: Vec<Component> = vec![
            Table::new(
                page.slice(&rows).to_vec(),
                vec![
                    DisplayLookup::titled("report_id", "ID"),
                    DisplayLookup::titled("created_at", "Created"),
                    DisplayLookup::titled("scan_conf_id", "Scan configuration"),
                ],
            )
            .with_no_data_message("No reports yet")
            .into(),
            page.pagination(rows.len() as u64).into(),
        ];

        Ok(base_page(components, Some("Collected reports")))
    }

    pub async fn report_info(&self, report_id: i64) -> ViewResult<ReportFull> {
        Ok(self.backend.get_report(report_id).await?)
    }

    pub async fn report_view(&self, report_id: i64, page: PageRequest) -> ViewResult<Components> {
        let report = self.report_info(report_id).await?;
        let config = &report.scan_config;

        let config_label = if config.name.is_empty() {
            report.scan_config_id.to_string()
        } else {
            config.name.clone()
        };

        let mut components = vec![
            Component::heading("Scan results report", 3),
            Component::paragraph(format!(
                "Created: {}",
                report.created_at.as_deref().map(fix_date_string).unwrap_or_default()
            )),
            Component::text("Scan configuration: "),
            Link::go_to(config_label, frontend::scan_config(report.scan_config_id)).into(),
            Component::paragraph(format!("Scanned host: {}", config.host)),
            Component::paragraph(format!("User: {}", config.user)),
            Component::paragraph("Configuration description:"),
            Component::paragraph(config.description.clone().unwrap_or_default()),
        ];

        for project in &report.affects_projects {
            components.extend(project_section(project, page));
        }

        Ok(base_page(components, Some("Report")))
    }
}

fn report_row(report: &Report) -> ReportRow {
    ReportRow {
        report_id: gen_link(&frontend::report(report.id), Some(report.id.to_string().as_str())),
        created_at: report.created_at.as_deref().map(fix_date_string),
        scan_conf_id: gen_link(
            &frontend::scan_config(report.scan_config_id),
            Some(report.scan_config_id.to_string().as_str()),
        ),
    }
}

/// Affected packages of one project, least severe first, unrated last.
pub fn affect_rows(project: &ReportProjectAffects) -> Vec<AffectWithVulnerRow> {
    let mut rows: Vec<AffectWithVulnerRow> = project
        .affects
        .iter()
        .map(|affect| {
            let rating = affect.vulner.primary_rating();
            let vulner_id = &affect.vulner.global_identifier;
            AffectWithVulnerRow {
                name: affect.affected.name.clone(),
                vendor: affect.affected.vendor.clone(),
                package_type: affect.affected.package_type.clone(),
                vulner: gen_link(&frontend::vulner(vulner_id), Some(vulner_id.as_str())),
                score: rating.map(|r| r.score),
                severity: rating.map(|r| r.severity.clone()),
            }
        })
        .collect();

    rows.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    rows
}

fn project_section(project: &ReportProjectAffects, page: PageRequest) -> Vec<Component> {
    let rows = affect_rows(project);
    let total = rows.len() as u64;

    vec![
        Component::heading(format!("Project: {}", project.project.name), 4),
        Component::paragraph(format!("Project type: {}", project.project.project_type)),
        Table::new(
            page.slice(&rows).to_vec(),
            vec![
                DisplayLookup::new("name"),
                DisplayLookup::new("vendor"),
                DisplayLookup::new("type"),
                DisplayLookup::new("vulner"),
                DisplayLookup::new("score"),
                DisplayLookup::new("severity"),
            ],
        )
        .with_no_data_message("No vulnerable packages found")
        .into(),
        page.pagination(total).into(),
    ]
}
