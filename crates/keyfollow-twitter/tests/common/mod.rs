//! Common test utilities for keyfollow-twitter integration tests.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use keyfollow_twitter::{AppAuthenticator, AppCredentials, TwitterClient};

pub const TEST_BEARER: &str = "AAAA-test-bearer-token";

/// Builds an id page in the shape of the v1.1 list endpoints.
pub fn id_page(ids: &[u64], next_cursor: i64) -> Value {
    json!({ "ids": ids, "next_cursor": next_cursor })
}

/// Builds a profile object in the shape of `users/lookup` entries.
pub fn user_object(id: u64, screen_name: &str) -> Value {
    json!({
        "id": id,
        "screen_name": screen_name,
        "name": format!("User {screen_name}")
    })
}

/// Mounts a token endpoint that accepts any client-credentials request.
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": TEST_BEARER
        })))
        .mount(server)
        .await;
}

pub fn test_authenticator(server: &MockServer) -> AppAuthenticator {
    AppAuthenticator::new(
        server.uri(),
        AppCredentials {
            consumer_key: "test-key".to_string(),
            consumer_secret: "test-secret".to_string().into(),
        },
    )
}

/// Authenticates against the mock server and returns a ready client.
pub async fn authenticated_client(server: &MockServer) -> TwitterClient {
    mount_token_endpoint(server).await;
    let token = test_authenticator(server).authenticate().await.unwrap();
    TwitterClient::new(server.uri(), token)
}
