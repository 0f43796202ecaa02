//! Discovery lookup: which Twitter handles have a linked Keybase identity.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{KeybaseError, KeybaseResult};
use crate::session::{CsrfToken, LoginSession};

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    matches: DiscoverMatches,
}

#[derive(Debug, Deserialize)]
struct DiscoverMatches {
    #[serde(default)]
    twitter: Vec<String>,
}

impl LoginSession {
    /// Looks up Keybase usernames for the given Twitter handles.
    ///
    /// Requires an authenticated session: the request authenticates with the
    /// cookie set during login plus the [`CsrfToken`]. All handles go out in
    /// a single comma-joined request (no batching cap on this endpoint; very
    /// large handle sets may exceed URL-length limits).
    ///
    /// The result aligns positionally with `handles`; an empty string means
    /// no linked identity.
    #[instrument(skip(self, csrf_token, handles), fields(handles = handles.len()))]
    pub async fn discover_twitter(
        &self,
        csrf_token: &CsrfToken,
        handles: &[String],
    ) -> KeybaseResult<Vec<String>> {
        let response = self
            .http_client
            .get(format!("{}/user/discover.json", self.api_base))
            .query(&[
                ("twitter", handles.join(",").as_str()),
                ("csrf_token", csrf_token.as_str()),
                ("usernames_only", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(KeybaseError::Transport {
                endpoint: "user/discover",
                status: status.as_u16(),
            });
        }

        let body: DiscoverResponse = response.json().await?;
        debug!(
            matched = body.matches.twitter.iter().filter(|m| !m.is_empty()).count(),
            "discovery lookup complete"
        );
        Ok(body.matches.twitter)
    }
}
