//! Vulnerability knowledge base pages

use std::sync::Arc;

use dpss_core::domain::{Rating, Vulnerability, VulnerabilityPage};
use dpss_core::infrastructure::ScanBackend;

use crate::domain::rows::{AffectWithIntervalRow, RatingRow, VulnerSummaryRow};
use crate::domain::{Component, Components, DisplayLookup, Link, Table};

use super::errors::ViewResult;
use super::frontend;
use super::page::base_page;
use super::pagination::PageRequest;
use super::transform::{gen_link, vulnerable_interval};

pub const VULNERS_PAGE_SIZE: u32 = 7;

pub struct VulnersService {
    backend: Arc<dyn ScanBackend>,
}

impl VulnersService {
    pub fn new(backend: Arc<dyn ScanBackend>) -> Self {
        Self { backend }
    }

    /// One backend-paged slice; the backend owns the paging here.
    pub async fn vulners_info(&self, page: PageRequest) -> ViewResult<VulnerabilityPage> {
        Ok(self
            .backend
            .list_vulnerabilities(page.page(), page.page_size())
            .await?)
    }

    pub async fn vulners_view(&self, page: PageRequest) -> ViewResult<Components> {
        let vulners = self.vulners_info(page).await?;

        let rows: Vec<VulnerSummaryRow> = vulners
            .vulners
            .iter()
            .map(|row| VulnerSummaryRow {
                global_identifier: gen_link(
                    &frontend::vulner(&row.global_identifier),
                    Some(row.global_identifier.as_str()),
                ),
                identifier: row.identifier.clone(),
                source_name: row.source_name.clone(),
                source_url: row.source_url.as_deref().map(|url| gen_link(url, None)),
                score: row.score,
                severity: row.severity.clone(),
            })
            .collect();

        let components = vec![
            Component::heading("Vulnerability knowledge base", 3),
            Table::new(
                rows,
                vec![
                    DisplayLookup::titled("global_identifier", "Vulnerability ID (knowledge base)"),
                    DisplayLookup::titled("identifier", "Vulnerability ID"),
                    DisplayLookup::titled("source_name", "Source"),
                    DisplayLookup::titled("source_url", "Source link"),
                    DisplayLookup::titled("score", "Score"),
                    DisplayLookup::titled("severity", "Severity"),
                ],
            )
            .into(),
            page.pagination(vulners.count).into(),
        ];

        Ok(base_page(
            components,
            Some("Vulnerability knowledge base"),
        ))
    }

    pub async fn vulner_info(&self, vulner_id: &str) -> ViewResult<Vulnerability> {
        Ok(self.backend.get_vulnerability(vulner_id).await?)
    }

    pub async fn vulner_view(&self, vulner_id: &str) -> ViewResult<Components> {
        let vulner = self.vulner_info(vulner_id).await?;

        let mut components = vec![
            Component::paragraph("Description:"),
            Component::paragraph(vulner.description.clone().unwrap_or_default()),
            Component::paragraph(format!(
                "Source: {}",
                vulner.source_name.as_deref().unwrap_or_default()
            )),
        ];
        if let Some(source_url) = vulner.source_url.as_deref() {
            components.push(Component::text("Source link: "));
            components.push(gen_link(source_url, None).into());
            components.push(Component::paragraph(""));
        }

        components.push(Component::heading("Vulnerability rating", 4));
        components.extend(rating_sections(&vulner.ratings));

        components.push(Component::heading("Affected software", 4));
        components.push(affected_table(&vulner).into());

        components.push(Component::heading("References", 4));
        for reference in &vulner.references {
            components.push(Component::text(format!("{}: ", reference.source)));
            components.push(Link::go_to(&reference.url, &reference.url).into());
            components.push(Component::paragraph(""));
        }

        let title = format!("Vulnerability: {}", vulner.global_identifier);
        Ok(base_page(components, Some(&title)))
    }
}

/// One block per distinct `(method, version)`, in first-seen order, each
/// with a table of only its own ratings.
pub fn rating_sections(ratings: &[Rating]) -> Vec<Component> {
    let mut groups: Vec<(&str, f64, Vec<&Rating>)> = Vec::new();
    for rating in ratings {
        match groups
            .iter_mut()
            .find(|(method, version, _)| *method == rating.method && *version == rating.version)
        {
            Some((_, _, members)) => members.push(rating),
            None => groups.push((rating.method.as_str(), rating.version, vec![rating])),
        }
    }

    groups
        .into_iter()
        .flat_map(|(method, version, members)| {
            let rows = members.into_iter().map(|r| RatingRow {
                score: r.score,
                severity: r.severity.clone(),
                vector: r.vector.clone(),
                source_name: r.source_name.clone(),
                source_url: gen_link(&r.source_url, Some(r.source_url.as_str())),
            });
            [
                Component::paragraph(format!("Rating method: {method}")),
                Component::paragraph(format!("Method version: {version:?}")),
                Table::new(
                    rows,
                    vec![
                        DisplayLookup::titled("score", "Score"),
                        DisplayLookup::titled("severity", "Severity"),
                        DisplayLookup::titled("vector", "Vector"),
                        DisplayLookup::titled("source_name", "Source"),
                        DisplayLookup::titled("source_url", "Source data"),
                    ],
                )
                .into(),
            ]
        })
        .collect()
}

fn affected_table(vulner: &Vulnerability) -> Table {
    let rows = vulner.affected.iter().map(|affected| AffectWithIntervalRow {
        name: affected.name.clone(),
        vendor: affected.vendor.clone(),
        package_type: affected.package_type.clone(),
        interval: vulnerable_interval(affected),
    });

    Table::new(
        rows,
        vec![
            DisplayLookup::titled("name", "Package"),
            DisplayLookup::titled("vendor", "Vendor"),
            DisplayLookup::titled("type", "Package type"),
            DisplayLookup::titled("interval", "Vulnerable versions"),
        ],
    )
    .with_no_data_message("No affected packages recorded")
}
