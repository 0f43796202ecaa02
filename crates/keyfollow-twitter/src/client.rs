//! Bearer-authenticated client for the v1.1 REST API.

use crate::auth::AccessToken;

/// Default bound on cursor-following before a collection is abandoned.
///
/// A server that never returns a terminating cursor would otherwise loop
/// forever.
pub const DEFAULT_MAX_PAGES: u32 = 500;

/// Client for bearer-authenticated v1.1 endpoints.
///
/// Holds the [`AccessToken`] produced by the client-credentials grant; the
/// token is treated as valid for the lifetime of the process.
#[derive(Debug)]
pub struct TwitterClient {
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) token: AccessToken,
    pub(crate) max_pages: u32,
}

impl TwitterClient {
    /// Creates a new client against the given API base URL.
    #[must_use]
    pub fn new(api_base: impl Into<String>, token: AccessToken) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: api_base.into(),
            token,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Overrides the pagination bound.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/1.1/{}.json", self.api_base, endpoint)
    }
}
