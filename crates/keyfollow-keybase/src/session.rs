//! Salted-challenge login flow.
//!
//! The flow walks a small state machine:
//!
//! ```text
//! Unauthenticated -> SaltRetrieved -> ChallengeAnswered -> Authenticated
//!                \________________\___________________\-> Failed
//! ```
//!
//! `Failed` is terminal and reachable from any state. The session owns a
//! cookie-enabled HTTP client: the login response sets a session cookie that
//! later same-host requests (the discovery lookup) replay automatically, so
//! the one client instance is scoped to the whole run.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{KeybaseError, KeybaseResult};
use crate::pwhash;

/// Progress of the challenge-login handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Unauthenticated,
    SaltRetrieved,
    ChallengeAnswered,
    Authenticated,
    Failed,
}

/// Forgery-protection token returned by a successful login.
///
/// Proves an authenticated session; consumed by the discovery lookup.
#[derive(Clone)]
pub struct CsrfToken(pub(crate) String);

impl CsrfToken {
    /// Returns the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CsrfToken").field(&"[REDACTED]").finish()
    }
}

/// Domain-level status payload carried by every API response.
#[derive(Debug, Deserialize)]
pub struct ServerStatus {
    pub code: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct SaltResponse {
    status: ServerStatus,
    #[serde(default)]
    salt: Option<String>,
    #[serde(default)]
    login_session: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    status: ServerStatus,
    #[serde(default)]
    csrf_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email_or_username: &'a str,
    hmac_pwh: &'a str,
    login_session: &'a str,
}

struct SaltChallenge {
    salt: String,
    login_session: String,
}

/// An authenticated (or in-progress) Keybase session.
pub struct LoginSession {
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_base: String,
    state: LoginState,
}

impl LoginSession {
    /// Creates a fresh session against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the cookie-enabled HTTP client cannot be built.
    pub fn new(api_base: impl Into<String>) -> KeybaseResult<Self> {
        let http_client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http_client,
            api_base: api_base.into(),
            state: LoginState::Unauthenticated,
        })
    }

    /// Current state of the handshake.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Runs the full salt → hash → login handshake.
    ///
    /// On success the session is `Authenticated`, its cookie jar holds the
    /// server's session cookie, and the returned [`CsrfToken`] is valid for
    /// follow-up calls on this session. Any failure leaves the session
    /// `Failed`; the login step is never attempted after a failed salt step.
    #[instrument(skip(self, passphrase), fields(api_base = %self.api_base))]
    pub async fn login(&mut self, username: &str, passphrase: &str) -> KeybaseResult<CsrfToken> {
        match self.run_handshake(username, passphrase).await {
            Ok(token) => Ok(token),
            Err(e) => {
                self.state = LoginState::Failed;
                Err(e)
            }
        }
    }

    async fn run_handshake(
        &mut self,
        username: &str,
        passphrase: &str,
    ) -> KeybaseResult<CsrfToken> {
        let challenge = self.fetch_salt(username).await?;
        self.state = LoginState::SaltRetrieved;

        let hmac_pwh =
            pwhash::compute_login_hash(passphrase, &challenge.salt, &challenge.login_session)?;
        self.state = LoginState::ChallengeAnswered;

        let token = self
            .submit_login(username, &hmac_pwh, &challenge.login_session)
            .await?;
        self.state = LoginState::Authenticated;
        debug!("login handshake complete");
        Ok(token)
    }

    async fn fetch_salt(&self, username: &str) -> KeybaseResult<SaltChallenge> {
        let response = self
            .http_client
            .get(format!("{}/getsalt.json", self.api_base))
            .query(&[("email_or_username", username)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(KeybaseError::Transport {
                endpoint: "getsalt",
                status: status.as_u16(),
            });
        }

        let body: SaltResponse = response.json().await?;
        if body.status.code != 0 {
            return Err(KeybaseError::Status {
                endpoint: "getsalt",
                code: body.status.code,
                name: body.status.name,
            });
        }

        let salt = body.salt.ok_or(KeybaseError::MissingField {
            endpoint: "getsalt",
            field: "salt",
        })?;
        let login_session = body.login_session.ok_or(KeybaseError::MissingField {
            endpoint: "getsalt",
            field: "login_session",
        })?;
        Ok(SaltChallenge {
            salt,
            login_session,
        })
    }

    async fn submit_login(
        &self,
        username: &str,
        hmac_pwh: &str,
        login_session: &str,
    ) -> KeybaseResult<CsrfToken> {
        let request = LoginRequest {
            email_or_username: username,
            hmac_pwh,
            login_session,
        };

        // The proof travels both as query parameters and as a JSON body; the
        // response's Set-Cookie lands in the shared jar.
        let response = self
            .http_client
            .post(format!("{}/login.json", self.api_base))
            .query(&[
                ("email_or_username", username),
                ("hmac_pwh", hmac_pwh),
                ("login_session", login_session),
            ])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(KeybaseError::Transport {
                endpoint: "login",
                status: status.as_u16(),
            });
        }

        let body: LoginResponse = response.json().await?;
        if body.status.code != 0 {
            return Err(KeybaseError::Status {
                endpoint: "login",
                code: body.status.code,
                name: body.status.name,
            });
        }

        body.csrf_token
            .map(CsrfToken)
            .ok_or(KeybaseError::MissingField {
                endpoint: "login",
                field: "csrf_token",
            })
    }
}

impl std::fmt::Debug for LoginSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSession")
            .field("api_base", &self.api_base)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
