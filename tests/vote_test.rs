//! Vote panel integration tests
//!
//! Cooldowns derived from claim logs, local refusals and the claim flow.

mod common;

use chrono::Utc;
use common::{client_for, logged_in_client, page_json, vote_site_json};
use fwportal::error::Error;
use fwportal::vote::{VotePanel, MAX_CLAIM_HISTORY};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FAR_FUTURE: &str = "2999-01-01T00:00:00";
const LONG_AGO: &str = "2000-01-01T00:00:00";

async fn mount_sites(server: &MockServer, sites: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/vote/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites))
        .mount(server)
        .await;
}

/// Newest log per site decides the cooldown; order is (position, id)
#[tokio::test]
async fn test_load_applies_newest_logs() {
    let mock_server = MockServer::start().await;
    mount_sites(
        &mock_server,
        json!([vote_site_json(1, 1, 1), vote_site_json(2, 0, 1), vote_site_json(3, 1, 1)]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            json!([
                {"id": 30, "site_id": 1, "claimed_points": 1, "next_available_at": FAR_FUTURE},
                {"id": 20, "site_id": 3, "claimed_points": 1, "next_available_at": LONG_AGO},
                {"id": 10, "site_id": 3, "claimed_points": 1, "next_available_at": FAR_FUTURE}
            ]),
            1,
            20,
            3,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let panel = VotePanel::load(&client, 20).await.unwrap();
    let now = Utc::now();

    let order: Vec<i64> = panel.ordered_sites().iter().map(|s| s.id).collect();
    assert_eq!(order, vec![2, 1, 3]);

    assert!(panel.remaining_ms(1, now) > 0);
    assert_eq!(panel.remaining_ms(2, now), 0);
    // Older log for site 3 is still cooling down but the newest one is not
    assert_eq!(panel.remaining_ms(3, now), 0);
    assert_eq!(panel.claims().count(), 3);
}

/// Logs failing to load leave every site claimable
#[tokio::test]
async fn test_log_failure_is_not_fatal() {
    let mock_server = MockServer::start().await;
    mount_sites(&mock_server, json!([vote_site_json(1, 0, 1)])).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let panel = VotePanel::load(&client, 20).await.unwrap();

    assert_eq!(panel.claims().count(), 0);
    assert!(panel.is_claimable(1, Utc::now()));
}

/// Anonymous visitors only see the sites
#[tokio::test]
async fn test_anonymous_load_skips_logs() {
    let mock_server = MockServer::start().await;
    mount_sites(&mock_server, json!([vote_site_json(1, 0, 1)])).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 20, 0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let panel = VotePanel::load(&client, 20).await.unwrap();
    assert_eq!(panel.sites().len(), 1);
}

/// A claim restarts the cooldown; a second claim is refused without a request
#[tokio::test]
async fn test_claim_then_refused() {
    let mock_server = MockServer::start().await;
    mount_sites(&mock_server, json!([vote_site_json(4, 0, 1)])).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 20, 0)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vote/sites/4/click"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "site_id": 4,
            "reward": 2,
            "next_available_at": FAR_FUTURE,
            "total_vote_points": 14,
            "site_url": "https://vote4.example/in"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let mut panel = VotePanel::load(&client, 20).await.unwrap();

    let response = panel.claim(&client, 4, Utc::now()).await.unwrap();
    assert_eq!(response.total_vote_points, 14);

    let newest = panel.claims().next().unwrap();
    assert_eq!(newest.site_id, 4);
    assert_eq!(newest.reward, 2);
    assert_eq!(newest.next_available_at.as_deref(), Some(FAR_FUTURE));
    assert!(panel.remaining_ms(4, Utc::now()) > 0);

    let err = panel.claim(&client, 4, Utc::now()).await.unwrap_err();
    assert!(matches!(err, Error::CooldownActive { remaining_ms } if remaining_ms > 0));
    assert_eq!(panel.claims().count(), 1);
}

/// Disabled and unknown sites are refused locally
#[tokio::test]
async fn test_disabled_site_refused_locally() {
    let mock_server = MockServer::start().await;
    mount_sites(&mock_server, json!([vote_site_json(1, 0, 0)])).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 20, 0)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let mut panel = VotePanel::load(&client, 20).await.unwrap();

    assert!(matches!(
        panel.claim(&client, 1, Utc::now()).await,
        Err(Error::SiteDisabled(1))
    ));
    assert!(matches!(
        panel.claim(&client, 9, Utc::now()).await,
        Err(Error::SiteNotFound(9))
    ));
}

/// Backend cooldown rejection leaves the panel untouched
#[tokio::test]
async fn test_backend_rejection_keeps_state() {
    let mock_server = MockServer::start().await;
    mount_sites(&mock_server, json!([vote_site_json(2, 0, 1)])).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 20, 0)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/vote/sites/2/click"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"detail": "Vote cooldown active for this site"})),
        )
        .mount(&mock_server)
        .await;

    let client = logged_in_client(&mock_server);
    let mut panel = VotePanel::load(&client, 20).await.unwrap();

    let err = panel.claim(&client, 2, Utc::now()).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(
        err.user_message("Error claiming vote"),
        "Vote cooldown active for this site"
    );
    assert_eq!(panel.claims().count(), 0);
    assert!(panel.is_claimable(2, Utc::now()));
}

/// History stays capped after many claims
#[tokio::test]
async fn test_history_capped_after_claims() {
    let mock_server = MockServer::start().await;
    let sites: Vec<_> = (1..=60).map(|id| vote_site_json(id, 0, 1)).collect();
    mount_sites(&mock_server, json!(sites)).await;

    Mock::given(method("GET"))
        .and(path("/vote/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(json!([]), 1, 20, 0)))
        .mount(&mock_server)
        .await;

    for id in 1..=60 {
        Mock::given(method("POST"))
            .and(path(format!("/vote/sites/{id}/click")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true, "site_id": id, "reward": 1,
                "next_available_at": FAR_FUTURE, "total_vote_points": id,
                "site_url": null
            })))
            .mount(&mock_server)
            .await;
    }

    let client = logged_in_client(&mock_server);
    let mut panel = VotePanel::load(&client, 20).await.unwrap();
    for id in 1..=60 {
        panel.claim(&client, id, Utc::now()).await.unwrap();
    }

    assert_eq!(panel.claims().count(), MAX_CLAIM_HISTORY);
    assert_eq!(panel.claims().next().unwrap().site_id, 60);
}
