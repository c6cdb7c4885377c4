//! Chat messaging tests: routing to the admin, explicit receivers,
//! and read receipts.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, parse_id};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn user_messages_are_routed_to_the_admin() {
    let app = TestApp::new().await;
    let admin_id = app.create_user("Administrador", "19801605", 3, true).await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({ "content": "Hola, ¿hay películas nuevas?" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(parse_id(&response.body["message"]["receiverId"]), admin_id);
    assert_eq!(response.body["message"]["isRead"], false);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admins_must_name_a_receiver() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let user_id = app.create_user("Usuario Demo", "123", 1, false).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({ "content": "Sin destinatario" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({ "content": "Bienvenido", "receiverId": user_id })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(parse_id(&response.body["message"]["receiverId"]), user_id);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn empty_messages_are_rejected() {
    let app = TestApp::new().await;
    app.create_user("Administrador", "19801605", 3, true).await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({ "content": "   " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn conversations_carry_display_names() {
    let app = TestApp::new().await;
    app.create_user("Administrador", "19801605", 3, true).await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    app.request(
        "POST",
        "/api/messages",
        Some(json!({ "content": "Hola" })),
        Some(&token),
    )
    .await;

    let response = app.request("GET", "/api/messages", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let messages = response.body["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["senderName"], "Usuario Demo");
    assert_eq!(messages[0]["receiverName"], "Administrador");
    assert_eq!(messages[0]["senderIsAdmin"], false);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn only_the_receiver_can_mark_a_message_read() {
    let app = TestApp::new().await;
    app.create_user("Administrador", "19801605", 3, true).await;
    app.create_user("Usuario Demo", "123", 1, false).await;
    let user_token = app.login("123").await;
    let admin_token = app.login("19801605").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({ "content": "Hola" })),
            Some(&user_token),
        )
        .await;
    let message_id = parse_id(&response.body["message"]["id"]);

    // The sender cannot mark their own message as read.
    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{message_id}/read"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{message_id}/read"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/messages", None, Some(&admin_token))
        .await;
    assert_eq!(response.body["messages"][0]["isRead"], true);
}
