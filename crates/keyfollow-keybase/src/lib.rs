//! Keybase API client for keyfollow
//!
//! Implements the credential-gated side of the correlation pipeline:
//!
//! - scrypt + HMAC-SHA512 login-hash derivation (salted-challenge protocol)
//! - The salt → hash → login handshake as an explicit state machine, with a
//!   cookie jar shared across the session
//! - The `user/discover` lookup that maps Twitter handles to Keybase
//!   usernames
//!
//! Keybase responses carry a domain-level `status.code` alongside the HTTP
//! status; both are surfaced as distinct error variants.
//!
//! # Example
//!
//! ```no_run
//! use keyfollow_keybase::{LoginSession, KEYBASE_API_BASE};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = LoginSession::new(KEYBASE_API_BASE)?;
//! let csrf_token = session.login("alice", "correct horse battery staple").await?;
//! let matches = session
//!     .discover_twitter(&csrf_token, &["jack".to_string()])
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod discover;
mod error;
mod pwhash;
mod session;

/// Production API base URL.
pub const KEYBASE_API_BASE: &str = "https://keybase.io/_/api/1.0";

// Re-exports
pub use error::{KeybaseError, KeybaseResult};
pub use pwhash::compute_login_hash;
pub use session::{CsrfToken, LoginSession, LoginState, ServerStatus};
