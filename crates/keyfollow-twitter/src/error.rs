//! Error types for the Twitter client.

use thiserror::Error;

/// Result type alias using [`TwitterError`].
pub type TwitterResult<T> = Result<T, TwitterError>;

/// Errors that can occur when talking to the Twitter API.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// The client-credentials grant was rejected. Not retryable.
    #[error("app authentication failed with HTTP status {status}")]
    Authentication { status: u16 },

    /// A page fetch during cursored collection returned a non-200 status.
    /// The whole collection is abandoned; no partial result is kept.
    #[error("fetching {endpoint} failed with HTTP status {status}")]
    Fetch { endpoint: String, status: u16 },

    /// A batch of the user lookup returned a non-200 status. Results from
    /// sibling batches are discarded.
    #[error("user lookup failed with HTTP status {status}")]
    Lookup { status: u16 },

    /// The server never returned a terminating cursor within the configured
    /// page budget.
    #[error("pagination of {endpoint} did not terminate within {max_pages} pages")]
    PaginationLimitExceeded { endpoint: String, max_pages: u32 },

    /// A response body did not have the expected shape.
    #[error("response from {endpoint} is missing expected field `{field}`")]
    MissingField { endpoint: String, field: String },

    /// HTTP transport or body-decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
