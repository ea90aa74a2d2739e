//! Error taxonomy for the capacity graph pipeline

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the pipeline and its collaborators.
///
/// Every variant is terminal for the current invocation; no stage retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The controller rejected the token, or no token could be found.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A lookup produced nothing to work with (no sites, no matching links).
    #[error("{0}")]
    NotFound(String),

    /// The controller answered with a non-success status; the raw body is
    /// kept for diagnosis.
    #[error("API call failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
