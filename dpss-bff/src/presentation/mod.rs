//! HTTP presentation layer

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod models;
pub mod routes;

pub use controllers::BffState;
pub use routes::create_router;
