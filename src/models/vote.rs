use serde::{Deserialize, Serialize};

/// A vote site as configured by administrators.
///
/// `next_available_at` is never sent by the backend; the vote panel fills it
/// in from the newest claim log for the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteSite {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "super::int_or_zero")]
    pub cooldown_minutes: i64,
    #[serde(default, deserialize_with = "super::int_or_zero")]
    pub points_reward: i64,
    #[serde(default = "enabled_by_default", deserialize_with = "super::flag")]
    pub is_enabled: bool,
    #[serde(default, deserialize_with = "super::int_or_zero")]
    pub position: i64,
    #[serde(default)]
    pub next_available_at: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

/// Record of a past reward grant.
///
/// The backend stores the reward as `claimed_points`; records created locally
/// after a claim use `reward`. The timestamp is kept raw because it may be
/// missing or malformed, both of which mean "claimable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteClaimLog {
    pub site_id: i64,
    #[serde(default, alias = "claimed_points")]
    pub reward: i64,
    #[serde(default)]
    pub next_available_at: Option<String>,
}

/// Response of `POST /vote/sites/{id}/click`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteClaimResponse {
    #[serde(default)]
    pub ok: bool,
    pub site_id: i64,
    pub reward: i64,
    pub next_available_at: String,
    #[serde(default)]
    pub total_vote_points: i64,
    #[serde(default)]
    pub site_url: Option<String>,
}

impl VoteClaimResponse {
    /// The claim-log record the panel prepends after this claim
    pub fn to_claim_log(&self) -> VoteClaimLog {
        VoteClaimLog {
            site_id: self.site_id,
            reward: self.reward,
            next_available_at: Some(self.next_available_at.clone()),
        }
    }
}

/// Body for `POST /vote/sites`
#[derive(Debug, Clone, Serialize)]
pub struct VoteSiteDraft {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cooldown_minutes: i64,
    pub points_reward: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl Default for VoteSiteDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            image_url: None,
            cooldown_minutes: 720,
            points_reward: 1,
            position: None,
        }
    }
}

/// Body for `PATCH /vote/sites/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoteSitePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_reward: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_log_row_decodes() {
        let json = r#"{"id": 9, "username": "thrall", "site_id": 2,
                       "claimed_points": 3, "next_available_at": "2024-05-01T22:00:00"}"#;
        let log: VoteClaimLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.site_id, 2);
        assert_eq!(log.reward, 3);
        assert_eq!(log.next_available_at.as_deref(), Some("2024-05-01T22:00:00"));
    }

    #[test]
    fn test_site_row_with_int_flag() {
        let json = r#"{"id": 1, "name": "TopG", "url": "https://topg.example",
                       "image_url": null, "cooldown_minutes": 720, "points_reward": 1,
                       "is_enabled": 0, "position": 2}"#;
        let site: VoteSite = serde_json::from_str(json).unwrap();
        assert!(!site.is_enabled);
        assert_eq!(site.next_available_at, None);
    }
}
