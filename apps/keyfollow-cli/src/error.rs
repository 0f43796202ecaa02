//! CLI error types and exit codes

use keyfollow_keybase::KeybaseError;
use keyfollow_twitter::TwitterError;
use thiserror::Error;

/// Exit codes:
/// - 0: success
/// - 1: configuration or local error
/// - 2: authentication rejected
/// - 3: network error
/// - 5: server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Twitter(#[from] TwitterError),

    #[error(transparent)]
    Keybase(#[from] KeybaseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Json(_) => 1,
            CliError::Twitter(e) => match e {
                TwitterError::Authentication { .. } => 2,
                TwitterError::Http(_) => 3,
                TwitterError::Fetch { .. }
                | TwitterError::Lookup { .. }
                | TwitterError::PaginationLimitExceeded { .. }
                | TwitterError::MissingField { .. }
                | TwitterError::Json(_) => 5,
            },
            CliError::Keybase(e) => match e {
                KeybaseError::Status { .. } => 2,
                KeybaseError::Http(_) => 3,
                KeybaseError::Transport { .. }
                | KeybaseError::Decode { .. }
                | KeybaseError::MissingField { .. } => 5,
            },
        }
    }

    /// Print the error and its cause chain to stderr.
    pub fn print(&self) {
        eprintln!("Error: {self}");

        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            eprintln!("Caused by: {cause}");
            source = cause.source();
        }
    }
}
