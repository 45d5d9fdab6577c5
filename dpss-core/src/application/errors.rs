//! Errors raised while talking to the scanner backend

use thiserror::Error;

/// Failure of a single backend round trip.
///
/// The variants are kept distinct so the presentation layer can choose a
/// status code per failure class instead of collapsing everything into 500.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection refused, DNS failure, broken body stream.
    #[error("Backend unreachable at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend request to {url} timed out")]
    Timeout { url: String },

    #[error("Backend resource not found: {url}")]
    NotFound { url: String },

    #[error("Backend returned HTTP {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The backend answered 2xx but the JSON did not match the expected shape.
    #[error("Unexpected backend response from {url}: {source}")]
    Contract {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build backend HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl BackendError {
    /// Classify a reqwest failure for `url`.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// URL of the failed call, when there was one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. }
            | Self::Timeout { url }
            | Self::NotFound { url }
            | Self::Status { url, .. }
            | Self::Contract { url, .. } => Some(url),
            Self::ClientBuild(_) => None,
        }
    }
}
