//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub frontend: FrontendConfig,
    pub logging: LoggingConfig,
}

/// Inbound HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Global request timeout in seconds applied at the HTTP layer.
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins. Use ["*"] to allow any (development only).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8002,
            request_timeout_seconds: 30,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// How the backend addresses a single report.
///
/// Backend revisions disagree: older ones serve `scan/reports/id/{id}`,
/// newer ones `scan/reports/{id}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPathStyle {
    #[default]
    ById,
    Flat,
}

/// Scanner backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub api_version: String,
    /// Total timeout for one backend call, in seconds.
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    /// Upper bound on idle pooled connections kept to the backend.
    pub pool_max_idle_per_host: usize,
    pub report_path_style: ReportPathStyle,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 5000,
            api_version: "v1".to_string(),
            timeout_seconds: 15,
            connect_timeout_seconds: 5,
            pool_max_idle_per_host: 8,
            report_path_style: ReportPathStyle::ById,
        }
    }
}

impl BackendConfig {
    /// Base URL every backend path is appended to, with a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/{}/",
            self.protocol, self.host, self.port, self.api_version
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Settings for what the rendering client is served
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Title of the HTML page that hosts the rendering client.
    pub site_title: String,
    /// Version of the prebuilt rendering client loaded by the host page.
    pub prebuilt_version: String,
    /// Hide internal error details from error responses.
    pub sanitize_errors: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            site_title: "DPSS UI".to_string(),
            prebuilt_version: "0.0.23".to_string(),
            sanitize_errors: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("DPSS").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;

        config.apply_legacy_env(|name| std::env::var(name).ok())?;

        config.validate()?;

        Ok(config)
    }

    /// Apply the flat `BACKEND_SERVICE_*` / `API_VERSION` variables.
    ///
    /// These win over every other source so existing deployments keep working.
    pub fn apply_legacy_env<F>(&mut self, lookup: F) -> Result<(), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(protocol) = lookup("BACKEND_SERVICE_PROTOCOL") {
            self.backend.protocol = protocol;
        }
        if let Some(host) = lookup("BACKEND_SERVICE_HOST") {
            self.backend.host = host;
        }
        if let Some(port) = lookup("BACKEND_SERVICE_PORT") {
            self.backend.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigLoadError::InvalidEnv {
                    name: "BACKEND_SERVICE_PORT".to_string(),
                    value: port.clone(),
                })?;
        }
        if let Some(api_version) = lookup("API_VERSION") {
            self.backend.api_version = api_version;
        }
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnv { name: String, value: String },
}
