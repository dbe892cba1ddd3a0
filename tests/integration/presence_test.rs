//! Integration tests for the presence ingest and query flow.

mod helpers;

use http::StatusCode;
use serde_json::json;

use statushub_core::types::UserId;

#[tokio::test]
async fn test_query_invalid_credential_rejected_regardless_of_user_id() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/v1/userStatus?user_id=42", None, Some("wrong"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({"Error": "Unauthorized"}));

    let response = app.request("GET", "/api/v1/userStatus", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({"Error": "Unauthorized"}));
}

#[tokio::test]
async fn test_query_missing_user_id_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/v1/userStatus", None, Some(helpers::API_KEY))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"Error": "user_id not provided"}));
}

#[tokio::test]
async fn test_query_unknown_user_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/v1/userStatus?user_id=42",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"Error": "User not found"}));
}

#[tokio::test]
async fn test_ingest_then_query_end_to_end() {
    let app = helpers::TestApp::new();

    let event = json!({
        "user_id": "42",
        "guild_id": helpers::GUILD_ID,
        "status": "online",
        "activities": [
            {"name": "Coding", "custom": true, "state": "heads down"}
        ],
        "username": "ash",
        "display_name": "Ash",
        "avatar_url": "https://cdn.example/ash.png",
    });

    let response = app
        .request(
            "POST",
            "/api/v1/presence",
            Some(event),
            Some(helpers::API_KEY),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    app.wait_for_user("42").await;

    let response = app
        .request(
            "GET",
            "/api/v1/userStatus?user_id=42",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "status": "online",
            "activities": [
                {"name": "Coding", "type": "CustomActivity", "state": "heads down"}
            ],
            "username": "ash",
            "display_name": "Ash",
            "profile_picture": "https://cdn.example/ash.png",
        })
    );
}

#[tokio::test]
async fn test_ingest_requires_credential() {
    let app = helpers::TestApp::new();

    let event = json!({
        "user_id": "42",
        "status": "online",
    });

    let response = app
        .request("POST", "/api/v1/presence", Some(event), Some("wrong"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.store.get(&UserId::from("42")).is_none());
}

#[tokio::test]
async fn test_second_event_replaces_document_wholesale() {
    let app = helpers::TestApp::new();

    let first = json!({
        "user_id": "7",
        "status": "online",
        "activities": [{"name": "Old Game", "type": "playing"}],
        "username": "kai",
    });
    app.request("POST", "/api/v1/presence", Some(first), Some(helpers::API_KEY))
        .await;
    app.wait_for_user("7").await;

    let second = json!({
        "user_id": "7",
        "status": "dnd",
        "activities": [],
        "username": "kai",
    });
    app.request(
        "POST",
        "/api/v1/presence",
        Some(second),
        Some(helpers::API_KEY),
    )
    .await;

    // Wait until the replacement has been applied.
    for _ in 0..200 {
        let record = app.store.get(&UserId::from("7")).unwrap();
        if record.activities.is_empty() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = app
        .request(
            "GET",
            "/api/v1/userStatus?user_id=7",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "dnd");
    assert_eq!(response.body["activities"], json!([]));
}

#[tokio::test]
async fn test_out_of_scope_guild_event_never_stored() {
    let app = helpers::TestApp::new();

    let event = json!({
        "user_id": "99",
        "guild_id": 9999,
        "status": "online",
    });

    let response = app
        .request(
            "POST",
            "/api/v1/presence",
            Some(event),
            Some(helpers::API_KEY),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    // The event is accepted by the transport but dropped by the adapter.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(app.store.get(&UserId::from("99")).is_none());
}

#[tokio::test]
async fn test_unknown_status_and_missing_names_default() {
    let app = helpers::TestApp::new();

    let event = json!({
        "user_id": "8",
        "status": "invisible",
    });
    app.request("POST", "/api/v1/presence", Some(event), Some(helpers::API_KEY))
        .await;
    app.wait_for_user("8").await;

    let response = app
        .request(
            "GET",
            "/api/v1/userStatus?user_id=8",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "status": "offline",
            "activities": [],
            "username": "Unknown",
            "display_name": "Unknown",
            "profile_picture": "",
        })
    );
}
