//! Application layer shared across crates

pub mod errors;

pub use errors::BackendError;
