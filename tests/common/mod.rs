//! Common test utilities

#![allow(dead_code)]

use fwportal::PortalClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Anonymous client pointed at the mock server
pub fn client_for(server: &MockServer) -> PortalClient {
    PortalClient::with_base_url(&server.uri()).unwrap()
}

/// Client that already carries [`TOKEN`]
pub fn logged_in_client(server: &MockServer) -> PortalClient {
    let client = client_for(server);
    client.set_token(Some(TOKEN.to_string()));
    client
}

pub fn page_json(items: Value, page: u32, page_size: u32, total: u64) -> Value {
    json!({
        "items": items,
        "pagination": { "page": page, "page_size": page_size, "total": total }
    })
}

pub fn user_json(username: &str, role: i64) -> Value {
    json!({
        "username": username,
        "credits": 5,
        "vote_points": 12,
        "gravatar": "https://www.gravatar.com/avatar/0",
        "role": role
    })
}

pub fn vote_site_json(id: i64, position: i64, is_enabled: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Top List {id}"),
        "url": format!("https://vote{id}.example/in"),
        "image_url": null,
        "cooldown_minutes": 720,
        "points_reward": 1,
        "is_enabled": is_enabled,
        "position": position
    })
}

pub fn topic_json(id: i64, category_id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "category_id": category_id,
        "title": title,
        "author_username": "jaina",
        "posts_count": 1,
        "is_locked": 0,
        "is_pinned": 0
    })
}
