//! DPSS BFF - turns the scanner backend's API into UI component trees
//!
//! # Layers
//!
//! - [`domain`]: the component tree the rendering client consumes, table rows and forms
//! - [`application`]: view services that fetch, reshape, paginate and wrap pages
//! - [`presentation`]: axum handlers, error mapping and the router
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dpss_bff::presentation::{BffState, create_router};
//!
//! let state = BffState::new(Arc::new(backend), config.frontend.clone());
//! let router = create_router(state, &config.server);
//! ```

pub mod application;
pub mod domain;
pub mod presentation;

pub use presentation::{BffState, create_router};
