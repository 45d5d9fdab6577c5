//! DPSS Core - Foundation crate for the DPSS UI backend-for-frontend
//!
//! # Modules
//!
//! - [`config`] - Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] - Shapes of the scanner backend's JSON (scan configs, reports, vulnerabilities)
//! - [`application`] - Shared error types
//! - [`infrastructure`] - The scanner backend HTTP client
//! - [`logging`] - Structured logging with tracing
//!
//! # Configuration
//!
//! ```rust,ignore
//! use dpss_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `DPSS__` prefix with double underscore separators.
//! The flat `BACKEND_SERVICE_*` and `API_VERSION` variables are honoured as well:
//!
//! ```bash
//! DPSS__SERVER__PORT=8002
//! BACKEND_SERVICE_HOST=scanner.internal
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::errors::BackendError;
pub use config::Config;
pub use logging::init_tracing;
