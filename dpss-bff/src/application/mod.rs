//! View services: fetch from the backend, reshape, wrap in the page skeleton

pub mod errors;
pub mod frontend;
pub mod page;
pub mod pagination;
pub mod reports;
pub mod scanner;
pub mod transform;
pub mod vulners;

pub use errors::{ViewError, ViewResult};
pub use page::base_page;
pub use pagination::PageRequest;
pub use reports::ReportsService;
pub use scanner::ScannerService;
pub use vulners::VulnersService;
