//! Scan configuration and project pages, plus the write operations behind
//! their forms

use std::sync::Arc;

use tracing::info;

use dpss_core::domain::{ProjectConfig, ScanConfig};
use dpss_core::infrastructure::ScanBackend;

use crate::domain::components::{ButtonType, FormField};
use crate::domain::rows::{ProjectRow, ScanConfigRow};
use crate::domain::{
    Button, Component, Components, DisplayLookup, DisplayMode, Event, FormValues, Link, Modal,
    ModelForm, ProjectConfigForm, ScanConfigForm, Table,
};

use super::errors::ViewResult;
use super::frontend;
use super::page::base_page;
use super::pagination::PageRequest;
use super::transform::{fix_date_string, gen_link};

pub const SCAN_CONFIGS_PAGE_SIZE: u32 = 7;
pub const SCAN_CONFIG_PAGE_SIZE: u32 = 7;

/// Page event that opens the run-scan confirmation modal.
pub const RUN_SCAN_EVENT: &str = "run-scan";

const MASKED_SECRET: &str = "********";

pub struct ScannerService {
    backend: Arc<dyn ScanBackend>,
}

impl ScannerService {
    pub fn new(backend: Arc<dyn ScanBackend>) -> Self {
        Self { backend }
    }

    pub async fn scan_configs_info(&self) -> ViewResult<Vec<ScanConfig>> {
        Ok(self.backend.list_scan_configs().await?)
    }

    pub async fn scan_configs_view(&self, page: PageRequest) -> ViewResult<Components> {
        let configs = self.scan_configs_info().await?;

        let rows: Vec<ScanConfigRow> = configs
            .iter()
            .map(|config| ScanConfigRow {
                id: gen_link(
                    &frontend::scan_config(config.id),
                    Some(config.id.to_string().as_str()),
                ),
                name: config.name.clone(),
                host: config.host.clone(),
                user: config.user.clone(),
                date: config.date.as_deref().map(fix_date_string),
            })
            .collect();

        let components: Vec<Component> = vec![
            Table::new(
                page.slice(&rows).to_vec(),
                vec![
                    DisplayLookup::titled("id", "ID"),
                    DisplayLookup::titled("name", "Configuration name"),
                    DisplayLookup::titled("host", "Host"),
                    DisplayLookup::titled("user", "User"),
                    DisplayLookup::titled("date", "Created"),
                ],
            )
            .with_no_data_message("No scan configurations yet")
            .into(),
            page.pagination(rows.len() as u64).into(),
            Button::new("Add configuration", Event::go_to(frontend::ADD_SCAN_CONFIG)).into(),
        ];

        Ok(base_page(components, Some("Scan configurations")))
    }

    pub async fn scan_config_info(&self, conf_id: i64) -> ViewResult<ScanConfig> {
        Ok(self.backend.get_scan_config(conf_id).await?)
    }

    pub async fn scan_config_view(&self, conf_id: i64, page: PageRequest) -> ViewResult<Components> {
        let config = self.scan_config_info(conf_id).await?;

        let rows: Vec<ProjectRow> = config
            .projects
            .iter()
            .map(|project| ProjectRow {
                id: gen_link(
                    &frontend::project_config(project.id),
                    Some(project.id.to_string().as_str()),
                ),
                name: project.name.clone(),
                project_type: project.project_type.to_string(),
                dir_path: project.dir_path.clone(),
                description: project.description.clone(),
            })
            .collect();

        let mut components = vec![
            Component::heading("Scan configuration description:", 4),
            Component::text(config.description.clone().unwrap_or_default()),
            Component::paragraph(""),
            Component::heading(format!("User: {}", config.user), 6),
            Component::heading(format!("Scanned host: {}", config.host), 6),
        ];
        if let Some(port) = &config.port {
            components.push(Component::heading(format!("SSH port: {port}"), 6));
        }
        components.extend([
            Component::heading(format!("Password: {MASKED_SECRET}"), 6),
            Button::new("Add project", Event::go_to(frontend::add_project(conf_id))).into(),
            Component::text(" "),
            Button::new("Run scan", Event::page(RUN_SCAN_EVENT)).into(),
            run_scan_modal(&config).into(),
            Component::paragraph(" "),
            Table::new(
                page.slice(&rows).to_vec(),
                vec![
                    DisplayLookup::titled("id", "ID"),
                    DisplayLookup::titled("name", "Project name"),
                    DisplayLookup::titled("type", "Project type"),
                    DisplayLookup::titled("dir_path", "Directory"),
                ],
            )
            .with_no_data_message("No projects in this configuration")
            .into(),
            page.pagination(rows.len() as u64).into(),
        ]);

        let title = format!("Configuration \"{}\"", config.name);
        Ok(base_page(components, Some(&title)))
    }

    pub fn add_scan_config_view(&self) -> Components {
        let form = ModelForm::post(
            ScanConfigForm::fields(),
            frontend::SUBMIT_ADD_SCAN_CONFIG,
            DisplayMode::Page,
        );
        base_page(vec![form.into()], Some("Add configuration"))
    }

    /// Create the configuration, then send the client to its page.
    pub async fn add_scan_config(&self, values: &FormValues) -> ViewResult<Components> {
        let payload = ScanConfigForm::parse(values)?.into_payload();
        let created = self.backend.create_scan_config(&payload).await?;

        info!(
            conf_id = created.created_item_id,
            name = %payload.name,
            "Scan configuration created"
        );

        Ok(vec![Component::fire(Event::go_to(frontend::scan_config(
            created.created_item_id,
        )))])
    }

    pub async fn project_config_info(&self, project_id: i64) -> ViewResult<ProjectConfig> {
        Ok(self.backend.get_project_config(project_id).await?)
    }

    pub async fn project_config_view(&self, project_id: i64) -> ViewResult<Components> {
        let project = self.project_config_info(project_id).await?;

        let components = vec![
            Component::heading(format!("Project type: {}", project.project_type.label()), 4),
            Component::heading(format!("Directory: {}", project.dir_path), 6),
            Component::heading("Project description:", 4),
            Component::text(project.description.clone().unwrap_or_default()),
            Component::paragraph(" "),
            Component::text("Scan configuration: "),
            Link::go_to(
                project.scan_config_id.to_string(),
                frontend::scan_config(project.scan_config_id),
            )
            .into(),
        ];

        let title = format!("Project configuration \"{}\"", project.name);
        Ok(base_page(components, Some(&title)))
    }

    pub fn add_project_view(&self, conf_id: i64) -> Components {
        let components = vec![
            Component::heading("Add project configuration", 2),
            ModelForm::post(
                ProjectConfigForm::fields(),
                frontend::submit_add_project(conf_id),
                DisplayMode::Page,
            )
            .into(),
        ];
        base_page(components, Some("Add project configuration"))
    }

    pub async fn add_project_config(
        &self,
        conf_id: i64,
        values: &FormValues,
    ) -> ViewResult<Components> {
        let payload = ProjectConfigForm::parse(values)?.into_payload(conf_id);
        let created = self.backend.create_project_config(&payload).await?;

        info!(
            conf_id,
            project_id = created.created_item_id,
            "Project configuration created"
        );

        Ok(vec![Component::fire(Event::go_to(frontend::project_config(
            created.created_item_id,
        )))])
    }

    /// Start a scan and return the client to where it came from.
    pub async fn start_config_scanner(&self, conf_id: i64) -> ViewResult<Components> {
        let created = self.backend.run_scan(conf_id).await?;

        info!(conf_id, report_id = created.created_item_id, "Scan started");

        Ok(vec![Component::fire(Event::Back)])
    }
}

fn run_scan_modal(config: &ScanConfig) -> Modal {
    let mut form = ModelForm::post(
        Vec::<FormField>::new(),
        frontend::submit_run_scan(config.id),
        DisplayMode::Default,
    );
    form.footer = Some(vec![
        Button {
            text: "Start".to_string(),
            on_click: None,
            html_type: Some(ButtonType::Submit),
        }
        .into(),
    ]);

    Modal {
        title: "Run scan".to_string(),
        body: vec![
            Component::paragraph(format!(
                "Scan {} as {} now?",
                config.host, config.user
            )),
            form.into(),
        ],
        footer: Some(vec![
            Button::new("Close", Event::clear_page(RUN_SCAN_EVENT)).into(),
        ]),
        open_trigger: Some(Event::page(RUN_SCAN_EVENT)),
    }
}
