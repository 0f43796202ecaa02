//! Batched resolution of account ids to profile records.

use futures::future;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::TwitterClient;
use crate::error::{TwitterError, TwitterResult};

/// Maximum ids per `users/lookup` request (API contract).
pub const LOOKUP_BATCH_SIZE: usize = 100;

/// Resolved profile record. Only `screen_name` is consumed downstream; the
/// other fields ride along for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitterUser {
    pub id: u64,
    pub screen_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TwitterClient {
    /// Resolves account ids to profile records.
    ///
    /// Ids are split into consecutive batches of at most
    /// [`LOOKUP_BATCH_SIZE`], fetched concurrently. The result concatenates
    /// batches in input order; order within a batch is whatever the server
    /// returned, so positions do not correspond to the input sequence. Any
    /// failed batch fails the whole resolution and sibling results are
    /// discarded.
    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    pub async fn lookup_users(&self, ids: &[u64]) -> TwitterResult<Vec<TwitterUser>> {
        let batches = ids.chunks(LOOKUP_BATCH_SIZE).map(|batch| self.lookup_batch(batch));
        let resolved = future::try_join_all(batches).await?;

        let users: Vec<TwitterUser> = resolved.into_iter().flatten().collect();
        debug!(users = users.len(), "resolved profile records");
        Ok(users)
    }

    async fn lookup_batch(&self, ids: &[u64]) -> TwitterResult<Vec<TwitterUser>> {
        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .http_client
            .get(self.endpoint_url("users/lookup"))
            .bearer_auth(self.token.as_str())
            .query(&[("user_id", joined.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TwitterError::Lookup {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_partitioning_is_consecutive_with_smaller_tail() {
        let ids: Vec<u64> = (0..250).collect();
        let sizes: Vec<usize> = ids.chunks(LOOKUP_BATCH_SIZE).map(<[u64]>::len).collect();
        assert_eq!(sizes, vec![100, 100, 50]);
        let first_of_last = ids.chunks(LOOKUP_BATCH_SIZE).last().unwrap()[0];
        assert_eq!(first_of_last, 200);
    }
}
