//! Configuration validation module

use crate::config::{BackendConfig, FrontendConfig, LoggingConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Backend configuration error: {message}")]
    Backend { message: String },

    #[error("Frontend configuration error: {message}")]
    Frontend { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn frontend(message: impl Into<String>) -> Self {
        Self::Frontend {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, only 0 is out of range
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.protocol.as_str(), "http" | "https") {
            return Err(ValidationError::backend(format!(
                "Protocol must be http or https, got '{}'",
                self.protocol
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ValidationError::backend("Host cannot be empty"));
        }

        if self.port == 0 {
            return Err(ValidationError::backend("Port must be in range 1-65535"));
        }

        if self.api_version.trim().is_empty() || self.api_version.contains('/') {
            return Err(ValidationError::backend(format!(
                "API version must be a single path segment, got '{}'",
                self.api_version
            )));
        }

        if self.timeout_seconds == 0 || self.connect_timeout_seconds == 0 {
            return Err(ValidationError::backend(
                "Backend timeouts must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for FrontendConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.site_title.trim().is_empty() {
            return Err(ValidationError::frontend("Site title cannot be empty"));
        }

        if self.prebuilt_version.trim().is_empty() {
            return Err(ValidationError::frontend(
                "Prebuilt client version cannot be empty",
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.format.as_str(), "json" | "pretty" | "compact") {
            return Err(ValidationError::logging(format!(
                "Log format must be one of json, pretty, compact; got '{}'",
                self.format
            )));
        }

        Ok(())
    }
}

impl Validate for crate::config::Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        self.frontend.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
