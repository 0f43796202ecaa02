//! Process configuration, read once at startup.

use secrecy::SecretString;
use std::env;

use keyfollow_keybase::KEYBASE_API_BASE;
use keyfollow_twitter::{DEFAULT_MAX_PAGES, TWITTER_API_BASE};

use crate::error::{CliError, CliResult};

/// Everything a correlation run needs, resolved from the environment.
///
/// Constructed once in `main` and handed to the engine; no component reads
/// the environment on its own.
pub struct Config {
    /// Twitter application (consumer) key.
    pub twitter_key: String,
    /// Twitter application secret.
    pub twitter_secret: SecretString,
    /// Subject account whose follow graph is correlated.
    pub twitter_screen_name: String,
    /// Keybase account to log in as.
    pub keybase_username: String,
    /// Keybase passphrase; never leaves the process.
    pub keybase_passphrase: SecretString,
    /// Twitter API base URL (overridable for development).
    pub twitter_api_base: String,
    /// Keybase API base URL (overridable for development).
    pub keybase_api_base: String,
    /// Bound on cursor-following per list endpoint.
    pub max_pages: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required Variables
    ///
    /// - `TWITTER_KEY` / `TWITTER_SECRET` - application credentials
    /// - `TWITTER_SCREEN_NAME` - subject account handle
    /// - `KEYBASE_USERNAME` / `KEYBASE_PASSPHRASE` - Keybase login
    ///
    /// # Optional Variables
    ///
    /// - `TWITTER_API_BASE` / `KEYBASE_API_BASE` - endpoint overrides
    /// - `KEYFOLLOW_MAX_PAGES` - pagination bound (default: 500)
    pub fn from_env() -> CliResult<Self> {
        // Load .env file if present (development only)
        let _ = dotenvy::dotenv();

        let max_pages = match env::var("KEYFOLLOW_MAX_PAGES") {
            Ok(raw) => raw.parse().map_err(|_| {
                CliError::Config(format!(
                    "KEYFOLLOW_MAX_PAGES must be a positive integer, got `{raw}`"
                ))
            })?,
            Err(_) => DEFAULT_MAX_PAGES,
        };

        Ok(Self {
            twitter_key: require("TWITTER_KEY")?,
            twitter_secret: require("TWITTER_SECRET")?.into(),
            twitter_screen_name: require("TWITTER_SCREEN_NAME")?,
            keybase_username: require("KEYBASE_USERNAME")?,
            keybase_passphrase: require("KEYBASE_PASSPHRASE")?.into(),
            twitter_api_base: env::var("TWITTER_API_BASE")
                .unwrap_or_else(|_| TWITTER_API_BASE.to_string()),
            keybase_api_base: env::var("KEYBASE_API_BASE")
                .unwrap_or_else(|_| KEYBASE_API_BASE.to_string()),
            max_pages,
        })
    }
}

fn require(name: &'static str) -> CliResult<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CliError::Config(format!(
            "required environment variable {name} is not set"
        ))),
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("twitter_key", &self.twitter_key)
            .field("twitter_secret", &"[REDACTED]")
            .field("twitter_screen_name", &self.twitter_screen_name)
            .field("keybase_username", &self.keybase_username)
            .field("keybase_passphrase", &"[REDACTED]")
            .field("twitter_api_base", &self.twitter_api_base)
            .field("keybase_api_base", &self.keybase_api_base)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}
