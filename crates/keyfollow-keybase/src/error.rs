//! Error types for the Keybase client.

use thiserror::Error;

/// Result type alias using [`KeybaseError`].
pub type KeybaseResult<T> = Result<T, KeybaseError>;

/// Errors that can occur when talking to the Keybase API.
#[derive(Debug, Error)]
pub enum KeybaseError {
    /// Server-supplied hex or base64 material could not be decoded.
    #[error("failed to decode {what}: {detail}")]
    Decode { what: &'static str, detail: String },

    /// The server answered HTTP 200 but reported a non-zero domain status.
    #[error("{endpoint} returned status {code} ({name})")]
    Status {
        endpoint: &'static str,
        code: i64,
        name: String,
    },

    /// An endpoint returned a non-200 HTTP status.
    #[error("{endpoint} failed with HTTP status {status}")]
    Transport { endpoint: &'static str, status: u16 },

    /// A successful response was missing a field the flow depends on.
    #[error("{endpoint} response is missing expected field `{field}`")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    /// HTTP transport or body-decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
