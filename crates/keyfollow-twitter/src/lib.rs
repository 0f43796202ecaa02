//! Twitter API client for keyfollow
//!
//! Implements the app-only side of the correlation pipeline against the v1.1
//! REST API:
//!
//! - `OAuth2` client-credentials authentication (bearer token)
//! - Cursor-paginated collection of friend/follower id lists
//! - Batched `users/lookup` resolution (100 ids per request, concurrent)
//!
//! No retry, backoff, or rate-limit handling: every failure aborts its whole
//! operation and propagates to the caller.
//!
//! # Example
//!
//! ```no_run
//! use keyfollow_twitter::{AppAuthenticator, AppCredentials, TwitterClient, TWITTER_API_BASE};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = AppCredentials {
//!     consumer_key: "your-consumer-key".to_string(),
//!     consumer_secret: "your-consumer-secret".to_string().into(),
//! };
//!
//! let token = AppAuthenticator::new(TWITTER_API_BASE, credentials)
//!     .authenticate()
//!     .await?;
//! let client = TwitterClient::new(TWITTER_API_BASE, token);
//! let friends = client.friend_ids("jack").await?;
//! let profiles = client.lookup_users(&friends).await?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod error;
mod lookup;
mod pagination;

/// Production API base URL.
pub const TWITTER_API_BASE: &str = "https://api.twitter.com";

// Re-exports
pub use auth::{AccessToken, AppAuthenticator, AppCredentials};
pub use client::{TwitterClient, DEFAULT_MAX_PAGES};
pub use error::{TwitterError, TwitterResult};
pub use lookup::{TwitterUser, LOOKUP_BATCH_SIZE};
