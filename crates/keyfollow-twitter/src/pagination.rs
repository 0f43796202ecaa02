//! Cursored collection of follow-graph endpoints.
//!
//! The v1.1 list endpoints page with an opaque numeric cursor: the first
//! request passes `-1`, each response carries `next_cursor`, and a missing or
//! zero cursor signals the end of the collection.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::TwitterClient;
use crate::error::{TwitterError, TwitterResult};

/// Cursor value that requests the first page.
const INITIAL_CURSOR: i64 = -1;

impl TwitterClient {
    /// Collects the ids of accounts the subject follows.
    pub async fn friend_ids(&self, screen_name: &str) -> TwitterResult<Vec<u64>> {
        self.collect_ids("friends/ids", screen_name).await
    }

    /// Collects the ids of accounts following the subject.
    pub async fn follower_ids(&self, screen_name: &str) -> TwitterResult<Vec<u64>> {
        self.collect_ids("followers/ids", screen_name).await
    }

    async fn collect_ids(&self, endpoint: &str, screen_name: &str) -> TwitterResult<Vec<u64>> {
        let items = self
            .collect_cursored(endpoint, Some("ids"), screen_name)
            .await?;
        items
            .iter()
            .map(|item| {
                item.as_u64().ok_or_else(|| TwitterError::MissingField {
                    endpoint: endpoint.to_string(),
                    field: "ids[] (numeric id)".to_string(),
                })
            })
            .collect()
    }

    /// Follows cursors on `endpoint` until exhaustion, flattening every
    /// page's result field (or the whole body when `result_field` is `None`)
    /// into one ordered sequence.
    ///
    /// The loop is iterative: page count never shows up as stack depth. A
    /// non-200 page aborts the whole collection, and a server that keeps
    /// returning live cursors is cut off at the configured `max_pages` with
    /// [`TwitterError::PaginationLimitExceeded`].
    #[instrument(skip(self))]
    pub async fn collect_cursored(
        &self,
        endpoint: &str,
        result_field: Option<&str>,
        screen_name: &str,
    ) -> TwitterResult<Vec<Value>> {
        let url = self.endpoint_url(endpoint);
        let mut cursor = INITIAL_CURSOR;
        let mut collected = Vec::new();
        let mut pages = 0u32;

        loop {
            if pages >= self.max_pages {
                return Err(TwitterError::PaginationLimitExceeded {
                    endpoint: endpoint.to_string(),
                    max_pages: self.max_pages,
                });
            }
            pages += 1;

            let response = self
                .http_client
                .get(&url)
                .bearer_auth(self.token.as_str())
                .query(&[
                    ("cursor", cursor.to_string().as_str()),
                    ("screen_name", screen_name),
                    ("skip_status", "true"),
                    ("include_user_entities", "false"),
                ])
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(TwitterError::Fetch {
                    endpoint: endpoint.to_string(),
                    status: status.as_u16(),
                });
            }

            let page: Value = response.json().await?;
            let items = match result_field {
                Some(field) => page.get(field).and_then(Value::as_array),
                None => page.as_array(),
            }
            .ok_or_else(|| TwitterError::MissingField {
                endpoint: endpoint.to_string(),
                field: result_field.unwrap_or("(array body)").to_string(),
            })?;
            collected.extend(items.iter().cloned());

            match page.get("next_cursor").and_then(Value::as_i64) {
                None | Some(0) => break,
                Some(next) => cursor = next,
            }
        }

        debug!(endpoint, pages, items = collected.len(), "collection complete");
        Ok(collected)
    }
}
