//! Admin user management tests.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_lists_all_users() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn non_admins_cannot_manage_users() {
    let app = TestApp::new().await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "Intruso", "password": "pw" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_creates_a_user_who_can_log_in() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "Nuevo Usuario",
                "password": "secret-pw",
                "allowedDevices": 2,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["name"], "Nuevo Usuario");
    assert_eq!(response.body["user"]["allowedDevices"], 2);

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "password": "secret-pw" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn update_without_a_password_keeps_the_old_one() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let user_id = app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}"),
            Some(json!({
                "name": "Usuario Renombrado",
                "allowedDevices": 2,
                "isSuspended": false,
                "isAdmin": false,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["name"], "Usuario Renombrado");

    // The old password still works.
    let login = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "123" })), None)
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn update_with_a_password_replaces_it() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let user_id = app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}"),
            Some(json!({
                "name": "Usuario Demo",
                "password": "nuevo-pw",
                "allowedDevices": 1,
                "isSuspended": false,
                "isAdmin": false,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let old = app
        .request("POST", "/api/auth/login", Some(json!({ "password": "123" })), None)
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);

    let new = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "password": "nuevo-pw" })),
            None,
        )
        .await;
    assert_eq!(new.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admins_cannot_delete_themselves() {
    let app = TestApp::new().await;
    let admin_id = app.create_user("Administrador", "19801605", 3, true).await;
    let token = app.login("19801605").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{admin_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn deleting_a_user_removes_them() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let user_id = app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{user_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(response.body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn deleting_an_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
