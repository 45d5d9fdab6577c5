//! Submitted forms and their field descriptors

use std::collections::HashMap;

use serde::Serialize;

use dpss_core::domain::{NewProjectConfig, NewScanConfig, ProjectType};

use super::components::{FormField, InputType, SelectOption};

/// One field-level validation failure, in the shape the client shows under
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
}

impl FormError {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: "missing",
            loc: vec![field.to_string()],
            msg: "Field required".to_string(),
        }
    }

    pub fn invalid(field: &str, msg: impl Into<String>) -> Self {
        Self {
            kind: "value_error",
            loc: vec![field.to_string()],
            msg: msg.into(),
        }
    }
}

/// Raw submitted values, keyed by field name
pub type FormValues = HashMap<String, String>;

struct FieldReader<'a> {
    values: &'a FormValues,
    errors: Vec<FormError>,
}

impl<'a> FieldReader<'a> {
    fn new(values: &'a FormValues) -> Self {
        Self {
            values,
            errors: Vec::new(),
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(&mut self, name: &str) -> String {
        match self.optional(name) {
            Some(value) => value,
            None => {
                self.errors.push(FormError::missing(name));
                String::new()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, Vec<FormError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

/// "Add scan configuration" form
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfigForm {
    pub name: String,
    pub host: String,
    pub user: String,
    pub password: String,
    pub description: Option<String>,
    pub port: Option<String>,
}

impl ScanConfigForm {
    pub fn fields() -> Vec<FormField> {
        vec![
            FormField::input("name", "Name", true, InputType::Text),
            FormField::input("host", "Host", true, InputType::Text),
            FormField::input("user", "User", true, InputType::Text),
            FormField::input("password", "Password", true, InputType::Password),
            FormField::textarea("description", "Description"),
            FormField::input("port", "SSH port", false, InputType::Text),
        ]
    }

    pub fn parse(values: &FormValues) -> Result<Self, Vec<FormError>> {
        let mut reader = FieldReader::new(values);

        let name = reader.required("name");
        let host = reader.required("host");
        let user = reader.required("user");
        let password = reader.required("password");
        let description = reader.optional("description");
        let port = reader.optional("port");

        if let Some(port) = &port {
            if !matches!(port.parse::<u16>(), Ok(p) if p > 0) {
                reader.errors.push(FormError::invalid(
                    "port",
                    "Port must be a number between 1 and 65535",
                ));
            }
        }

        reader.finish(Self {
            name,
            host,
            user,
            password,
            description,
            port,
        })
    }

    /// Backend payload; the password travels as `secret`.
    pub fn into_payload(self) -> NewScanConfig {
        NewScanConfig {
            name: self.name,
            host: self.host,
            user: self.user,
            secret: self.password,
            description: self.description.unwrap_or_default(),
            port: self.port,
        }
    }
}

/// "Add project" form
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfigForm {
    pub name: String,
    pub project_type: ProjectType,
    pub dir_path: String,
    pub description: Option<String>,
}

impl ProjectConfigForm {
    pub fn fields() -> Vec<FormField> {
        let options = ProjectType::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.as_str().to_string(),
                label: t.label().to_string(),
            })
            .collect();

        vec![
            FormField::input("name", "Project name", true, InputType::Text),
            FormField::select("type", "Project type", options),
            FormField::input("dir_path", "Project directory", true, InputType::Text),
            FormField::textarea("description", "Description"),
        ]
    }

    pub fn parse(values: &FormValues) -> Result<Self, Vec<FormError>> {
        let mut reader = FieldReader::new(values);

        let name = reader.required("name");
        let raw_type = reader.optional("type");
        let dir_path = reader.required("dir_path");
        let description = reader.optional("description");

        let project_type = match raw_type.as_deref().map(ProjectType::parse) {
            Some(Some(t)) => Some(t),
            Some(None) => {
                reader.errors.push(FormError::invalid(
                    "type",
                    "Input should be 'python', 'golang' or 'javascript'",
                ));
                None
            }
            None => {
                reader.errors.push(FormError::missing("type"));
                None
            }
        };

        match project_type {
            Some(project_type) if reader.errors.is_empty() => reader.finish(Self {
                name,
                project_type,
                dir_path,
                description,
            }),
            _ => Err(reader.errors),
        }
    }

    pub fn into_payload(self, scan_config_id: i64) -> NewProjectConfig {
        NewProjectConfig {
            name: self.name,
            project_type: self.project_type,
            dir_path: self.dir_path,
            description: self.description.unwrap_or_default(),
            scan_config_id,
        }
    }
}
