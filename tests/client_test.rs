//! Integration tests for PortalClient using wiremock
//!
//! These tests validate request building and error mapping against mock servers.

mod common;

use common::{client_for, logged_in_client, page_json};
use fwportal::api::admin::TopicAction;
use fwportal::error::{Error, ErrorCategory, PortalErrorTrait};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer header is attached only while a token is set
#[tokio::test]
async fn test_bearer_header_only_with_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 10, 0)))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.list_news(1, 10).await.unwrap();

    client.set_token(Some("abc".to_string()));
    client.list_news(1, 10).await.unwrap();

    client.set_token(None);
    client.list_news(1, 10).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let auth: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .map(|v| v.to_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(auth, vec![None, Some("Bearer abc".to_string()), None]);
}

/// Backend `detail` string is surfaced to the user
#[tokio::test]
async fn test_detail_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "thrall", "password": "wrong"})))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.login("thrall", "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail(), Some("Invalid credentials"));
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(err.category(), ErrorCategory::Auth);
    assert!(!err.is_recoverable());
}

/// Request validation errors arrive as a list of messages
#[tokio::test]
async fn test_detail_list_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "invalid email", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "too short", "type": "value_error"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .register("thrall", "x", Some("nope"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Registration failed"), "invalid email; too short");
}

/// Without a detail the caller's fallback is shown
#[tokio::test]
async fn test_fallback_without_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forum/categories"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_categories().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 502, detail: None }));
    assert_eq!(err.user_message("Error loading categories"), "Error loading categories");
    assert!(err.is_recoverable());
}

/// Unexpected response shapes become decode errors
#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/realm_status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.realm_status().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

/// Blank required fields are refused before any request
#[tokio::test]
async fn test_validation_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);

    let err = client.create_topic(3, "   ", "body").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.user_message("fallback"), "title is required");

    assert!(matches!(
        client.create_post(7, "\n\t").await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        client.login("", "secret").await,
        Err(Error::Validation(_))
    ));
}

/// Authenticated endpoints fail fast without a token
#[tokio::test]
async fn test_not_logged_in_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(matches!(client.click_vote_site(1).await, Err(Error::NotLoggedIn)));
    assert!(matches!(
        client.add_news_comment(4, "hi").await,
        Err(Error::NotLoggedIn)
    ));
    assert!(matches!(client.me().await, Err(Error::NotLoggedIn)));
}

/// Trimmed content is what gets sent
#[tokio::test]
async fn test_post_content_trimmed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/forum/topics/7/posts"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"content": "See you Friday"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 55, "topic_id": 7, "author_username": "thrall",
            "content": "See you Friday", "created_at": "2024-05-01T12:00:00"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let post = client.create_post(7, "  See you Friday \n").await.unwrap();
    assert_eq!(post.id, 55);
}

/// Usernames are percent-encoded into the profile path
#[tokio::test]
async fn test_profile_username_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile/Jaina%20Proud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "Jaina Proud",
            "gravatar": "",
            "avatar_fallback": "",
            "has_email": true,
            "characters": [
                {"realm_id": 1, "realm_name": "Icecrown", "name": "Jaina",
                 "level": 80, "race": 1, "class": 8, "gender": 1}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let profile = client.profile("Jaina Proud").await.unwrap();
    assert_eq!(profile.characters.len(), 1);
    assert_eq!(profile.characters[0].realm_name, "Icecrown");
}

/// Realm-wrapped responses are unwrapped
#[tokio::test]
async fn test_online_unwraps_realms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/online"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "realms": [{
                "realm_id": 1, "name": "Icecrown", "status": "online",
                "pagination": {"page": 2, "page_size": 50, "total": 51},
                "characters": [
                    {"guid": 9, "name": "Arthas", "race": 1, "class": 6,
                     "gender": 0, "level": 80, "guild": null, "faction": 2}
                ]
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let realms = client.online(2, 50).await.unwrap();

    assert_eq!(realms.len(), 1);
    assert_eq!(realms[0].characters[0].name, "Arthas");
    assert_eq!(realms[0].pagination.unwrap().total_pages(), 2);
}

/// Moderation actions map onto their own paths
#[tokio::test]
async fn test_moderation_paths() {
    let mock_server = MockServer::start().await;

    for action in ["lock", "unpin"] {
        Mock::given(method("POST"))
            .and(path(format!("/forum/topics/5/{action}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/forum/posts/90"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    client.moderate_topic(5, TopicAction::Lock).await.unwrap();
    client.moderate_topic(5, TopicAction::Unpin).await.unwrap();
    client.delete_post(90).await.unwrap();
}
