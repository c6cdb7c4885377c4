//! Authentication flow tests: login, identity, logout, suspension,
//! and the per-device session limit.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn login_returns_user_and_token() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "123" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["user"]["name"], "Usuario Demo");
    assert_eq!(response.body["user"]["isAdmin"], false);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(response.body["user"].get("passwordHash").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "456" })), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn empty_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn me_returns_the_authenticated_identity() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["name"], "Usuario Demo");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn me_without_a_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn a_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("short"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            Some("this-is-long-enough-but-not-a-real-token"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn logout_revokes_the_session() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The stateless JWT is still valid but its session row is gone.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn logout_without_a_session_still_succeeds() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn suspension_cuts_live_tokens() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;
    let user_id = app.create_user("Usuario Demo", "123", 1, false).await;
    let user_token = app.login("123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}"),
            Some(json!({
                "name": "Usuario Demo",
                "allowedDevices": 1,
                "isSuspended": true,
                "isAdmin": false,
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // And the suspended account can no longer log in.
    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "123" })), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn device_limit_blocks_an_extra_session() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    let first = app.login_with_device("123", "device-a").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.login_with_device("123", "device-b").await;
    assert_eq!(second.status, StatusCode::FORBIDDEN);
    assert_eq!(second.body["success"], false);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn logins_without_a_device_id_are_not_counted_against_the_limit() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    app.login("123").await;
    app.login("123").await;
    let token = app.login("123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn logout_frees_a_device_slot() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    let first = app.login_with_device("123", "device-a").await;
    let token = first.body["token"].as_str().unwrap().to_string();

    app.request("POST", "/api/auth/logout", None, Some(&token))
        .await;

    let second = app.login_with_device("123", "device-b").await;
    assert_eq!(second.status, StatusCode::OK);
}
