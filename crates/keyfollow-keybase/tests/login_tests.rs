//! Integration tests for the salted-challenge login flow.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use keyfollow_keybase::{KeybaseError, LoginSession, LoginState};

#[tokio::test]
async fn successful_handshake_sends_computed_proof() {
    let server = MockServer::start().await;
    mount_getsalt_success(&server).await;

    // The login request must carry the exact hash the derivation produces
    // for the fixed salt and session blob.
    Mock::given(method("POST"))
        .and(path("/login.json"))
        .and(query_param("email_or_username", TEST_USERNAME))
        .and(query_param("hmac_pwh", TEST_HMAC_PWH))
        .and(query_param("login_session", TEST_LOGIN_SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 0, "name": "OK" },
            "csrf_token": TEST_CSRF
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = LoginSession::new(server.uri()).unwrap();
    assert_eq!(session.state(), LoginState::Unauthenticated);

    let token = session.login(TEST_USERNAME, TEST_PASSPHRASE).await.unwrap();
    assert_eq!(token.as_str(), TEST_CSRF);
    assert_eq!(session.state(), LoginState::Authenticated);
}

#[tokio::test]
async fn failed_salt_step_never_reaches_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getsalt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 205, "name": "BAD_SESSION" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 0, "name": "OK" },
            "csrf_token": TEST_CSRF
        })))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = LoginSession::new(server.uri()).unwrap();
    let err = session
        .login(TEST_USERNAME, TEST_PASSPHRASE)
        .await
        .unwrap_err();

    match err {
        KeybaseError::Status {
            endpoint,
            code,
            name,
        } => {
            assert_eq!(endpoint, "getsalt");
            assert_eq!(code, 205);
            assert_eq!(name, "BAD_SESSION");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.state(), LoginState::Failed);
}

#[tokio::test]
async fn http_failure_on_salt_step_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getsalt.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let mut session = LoginSession::new(server.uri()).unwrap();
    let err = session
        .login(TEST_USERNAME, TEST_PASSPHRASE)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KeybaseError::Transport { endpoint: "getsalt", status: 502 }
    ));
    assert_eq!(session.state(), LoginState::Failed);
}

#[tokio::test]
async fn rejected_login_step_fails_the_session() {
    let server = MockServer::start().await;
    mount_getsalt_success(&server).await;

    Mock::given(method("POST"))
        .and(path("/login.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 204, "name": "BAD_LOGIN_PASSWORD" }
        })))
        .mount(&server)
        .await;

    let mut session = LoginSession::new(server.uri()).unwrap();
    let err = session
        .login(TEST_USERNAME, TEST_PASSPHRASE)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KeybaseError::Status { endpoint: "login", code: 204, .. }
    ));
    assert_eq!(session.state(), LoginState::Failed);
}

#[tokio::test]
async fn malformed_salt_fails_before_the_login_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getsalt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "code": 0, "name": "OK" },
            "salt": "zz-not-hex",
            "login_session": TEST_LOGIN_SESSION
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = LoginSession::new(server.uri()).unwrap();
    let err = session
        .login(TEST_USERNAME, TEST_PASSPHRASE)
        .await
        .unwrap_err();

    assert!(matches!(err, KeybaseError::Decode { .. }));
    assert_eq!(session.state(), LoginState::Failed);
}
