//! DPSS UI - backend-for-frontend binary crate
//!
//! Wires the scanner backend client from `dpss-core` into the component
//! router from `dpss-bff`.

mod app;

pub use app::create_app;
pub use dpss_core::{Config, init_tracing};

pub use dpss_bff;
pub use dpss_core;
