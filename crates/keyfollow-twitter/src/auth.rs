//! `OAuth2` application-only authentication (client-credentials grant).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::{header::AUTHORIZATION, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{TwitterError, TwitterResult};

/// Opaque bearer credential for app-only API access.
///
/// Valid for the lifetime of the process; no expiry or refresh handling.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns the raw bearer string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Consumer key/secret pair for the client-credentials grant.
///
/// The [`Debug`] impl redacts the secret to prevent accidental credential
/// exposure in log output.
#[derive(Clone)]
pub struct AppCredentials {
    pub consumer_key: String,
    pub consumer_secret: SecretString,
}

impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Token response from the `oauth2/token` endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: Option<String>,
}

/// Exchanges app credentials for a bearer token.
#[derive(Debug)]
pub struct AppAuthenticator {
    api_base: String,
    credentials: AppCredentials,
    http_client: reqwest::Client,
}

impl AppAuthenticator {
    /// Creates a new authenticator against the given API base URL.
    #[must_use]
    pub fn new(api_base: impl Into<String>, credentials: AppCredentials) -> Self {
        Self {
            api_base: api_base.into(),
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    /// Performs the client-credentials grant and returns the bearer token.
    ///
    /// Any non-200 response fails with [`TwitterError::Authentication`]
    /// carrying the HTTP status; the caller must not retry.
    #[instrument(skip(self))]
    pub async fn authenticate(&self) -> TwitterResult<AccessToken> {
        let response = self
            .http_client
            .post(format!("{}/oauth2/token", self.api_base))
            .header(AUTHORIZATION, self.basic_authorization())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TwitterError::Authentication {
                status: status.as_u16(),
            });
        }

        let token_response: TokenResponse = response.json().await?;
        debug!("acquired app-only bearer token");

        Ok(AccessToken(token_response.access_token))
    }

    /// Basic authorization header value: key and secret are percent-encoded,
    /// joined with a colon, and base64-encoded.
    fn basic_authorization(&self) -> String {
        let joined = format!(
            "{}:{}",
            urlencoding::encode(&self.credentials.consumer_key),
            urlencoding::encode(self.credentials.consumer_secret.expose_secret()),
        );
        format!("Basic {}", BASE64.encode(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator(key: &str, secret: &str) -> AppAuthenticator {
        AppAuthenticator::new(
            "https://api.example.com",
            AppCredentials {
                consumer_key: key.to_string(),
                consumer_secret: secret.to_string().into(),
            },
        )
    }

    #[test]
    fn basic_authorization_joins_and_encodes() {
        let auth = authenticator("key", "secret");
        // base64("key:secret")
        assert_eq!(auth.basic_authorization(), "Basic a2V5OnNlY3JldA==");
    }

    #[test]
    fn basic_authorization_percent_encodes_reserved_characters() {
        let auth = authenticator("k ey", "se/cret");
        let encoded = auth.basic_authorization().replace("Basic ", "");
        let decoded = BASE64.decode(encoded).unwrap();
        assert_eq!(decoded, b"k%20ey:se%2Fcret");
    }

    #[test]
    fn debug_output_redacts_secret() {
        let auth = authenticator("key", "hunter2");
        let rendered = format!("{:?}", auth.credentials);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
