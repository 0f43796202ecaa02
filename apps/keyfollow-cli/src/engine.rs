//! Top-level orchestration of the correlation run.

use secrecy::ExposeSecret;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument};

use keyfollow_keybase::LoginSession;
use keyfollow_twitter::{AppAuthenticator, AppCredentials, TwitterClient};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Twitter handle → Keybase username, non-empty matches only.
pub type CorrelationResult = BTreeMap<String, String>;

/// Drives the whole pipeline: authenticate, collect the follow graph,
/// resolve profiles, log in to Keybase, discover, pair.
///
/// Every step is all-or-nothing; the first failure aborts the run and
/// surfaces through [`CliError`]. Nothing is retried and no partial result
/// is produced.
pub struct CorrelationEngine {
    config: Config,
}

impl CorrelationEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[instrument(skip(self), fields(screen_name = %self.config.twitter_screen_name))]
    pub async fn run(&self) -> CliResult<CorrelationResult> {
        let cfg = &self.config;

        let credentials = AppCredentials {
            consumer_key: cfg.twitter_key.clone(),
            consumer_secret: cfg.twitter_secret.clone(),
        };
        let token = AppAuthenticator::new(&cfg.twitter_api_base, credentials)
            .authenticate()
            .await?;
        let twitter =
            TwitterClient::new(&cfg.twitter_api_base, token).with_max_pages(cfg.max_pages);

        // Both directions of the follow graph, fetched concurrently.
        let (following, followers) = tokio::try_join!(
            twitter.friend_ids(&cfg.twitter_screen_name),
            twitter.follower_ids(&cfg.twitter_screen_name),
        )?;
        info!(
            following = following.len(),
            followers = followers.len(),
            "collected follow graph"
        );

        // Computed for visibility but otherwise unused: the pipeline
        // resolves everyone we follow, not just the mutuals.
        let not_following_back = difference(&following, &followers);
        let following_back = intersection(&followers, &following);
        debug!(
            not_following_back = not_following_back.len(),
            following_back = following_back.len(),
            "follow-graph set algebra"
        );

        // Profile resolution and the Keybase handshake are independent
        // dependency chains; run them concurrently.
        let mut session = LoginSession::new(&cfg.keybase_api_base)?;
        let (users, csrf_token) = tokio::try_join!(
            async { twitter.lookup_users(&following).await.map_err(CliError::from) },
            async {
                session
                    .login(
                        &cfg.keybase_username,
                        cfg.keybase_passphrase.expose_secret(),
                    )
                    .await
                    .map_err(CliError::from)
            },
        )?;

        let handles: Vec<String> = users.into_iter().map(|u| u.screen_name).collect();
        let matches = session.discover_twitter(&csrf_token, &handles).await?;

        let correlated = correlate(handles, matches);
        info!(matched = correlated.len(), "correlation complete");
        Ok(correlated)
    }
}

/// Elements of `a` not present in `b`, in `a`'s order.
fn difference(a: &[u64], b: &[u64]) -> Vec<u64> {
    let exclude: HashSet<u64> = b.iter().copied().collect();
    a.iter().copied().filter(|id| !exclude.contains(id)).collect()
}

/// Elements of `a` also present in `b`, in `a`'s order.
fn intersection(a: &[u64], b: &[u64]) -> Vec<u64> {
    let keep: HashSet<u64> = b.iter().copied().collect();
    a.iter().copied().filter(|id| keep.contains(id)).collect()
}

/// Zips handles against their positional discovery matches, keeping only
/// the ones with a non-empty match.
fn correlate(handles: Vec<String>, matches: Vec<String>) -> CorrelationResult {
    handles
        .into_iter()
        .zip(matches)
        .filter(|(_, kb)| !kb.is_empty())
        .collect()
}
