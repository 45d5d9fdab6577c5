//! View-level errors

use thiserror::Error;

use dpss_core::BackendError;

use crate::domain::FormError;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Form validation failed: {} invalid field(s)", .0.len())]
    InvalidForm(Vec<FormError>),
}

impl ViewError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl From<Vec<FormError>> for ViewError {
    fn from(errors: Vec<FormError>) -> Self {
        Self::InvalidForm(errors)
    }
}

pub type ViewResult<T> = Result<T, ViewError>;
