//! Common test utilities for keyfollow-keybase integration tests.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USERNAME: &str = "tester";
pub const TEST_PASSPHRASE: &str = "correct horse battery staple";
pub const TEST_SALT: &str = "aabbccddeeff00112233445566778899";
// base64 of the 48-byte sequence 0x00..0x2f
pub const TEST_LOGIN_SESSION: &str =
    "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4v";
// compute_login_hash(TEST_PASSPHRASE, TEST_SALT, TEST_LOGIN_SESSION)
pub const TEST_HMAC_PWH: &str =
    "0e90cfe6d822ad0dc5468eca85f40f6053cdb0d89faa987a2c0264dbcab69f42\
     6cba09901969ddb6b3d5cc7295cc0de2805fd3be92c4a47b4c6be7f007d10595";
pub const TEST_CSRF: &str = "lgHZIGU0-test-csrf-token";
pub const TEST_COOKIE: &str = "session=deadbeef-session-cookie";

/// Mounts a `getsalt` endpoint answering with the fixed test challenge.
pub async fn mount_getsalt_success(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/getsalt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 0, "name": "OK" },
            "salt": TEST_SALT,
            "login_session": TEST_LOGIN_SESSION
        })))
        .mount(server)
        .await;
}

/// Mounts a `login` endpoint that accepts any proof and sets the session
/// cookie.
pub async fn mount_login_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "status": { "code": 0, "name": "OK" },
                    "csrf_token": TEST_CSRF
                }))
                .insert_header("set-cookie", format!("{TEST_COOKIE}; Path=/")),
        )
        .mount(server)
        .await;
}
