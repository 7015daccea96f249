//! Player-facing vote endpoints

use super::PortalClient;
use crate::error::Result;
use crate::models::{VoteClaimLog, VoteClaimResponse, VoteSite};
use crate::pagination::Page;

impl PortalClient {
    /// Enabled vote sites ordered by position
    pub async fn vote_sites(&self) -> Result<Vec<VoteSite>> {
        self.get_json(&["vote", "sites"]).await
    }

    /// The current user's claim logs, newest first
    pub async fn vote_logs(&self, page: u32, page_size: u32) -> Result<Page<VoteClaimLog>> {
        self.require_token()?;
        self.get_json_with(
            &["vote", "logs"],
            &[("page", page), ("page_size", page_size)],
        )
        .await
    }

    /// Claim the reward for `site_id`. The backend answers 429 while the
    /// site's cooldown is running.
    pub async fn click_vote_site(&self, site_id: i64) -> Result<VoteClaimResponse> {
        self.require_token()?;
        let response: VoteClaimResponse = self
            .post_empty(&["vote", "sites", &site_id.to_string(), "click"])
            .await?;
        tracing::info!(
            site_id = response.site_id,
            reward = response.reward,
            next_available_at = %response.next_available_at,
            "Vote claimed"
        );
        Ok(response)
    }
}
