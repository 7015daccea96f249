//! In-memory vote panel state

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use super::cooldown::{self, MAX_CLAIM_HISTORY};
use crate::api::PortalClient;
use crate::error::{Error, Result};
use crate::models::{VoteClaimLog, VoteClaimResponse, VoteSite};

/// Vote sites plus the user's recent claims.
///
/// Each site's `next_available_at` always reflects the newest claim known to
/// the panel, either loaded from the backend or recorded after a claim.
#[derive(Debug, Clone, Default)]
pub struct VotePanel {
    sites: Vec<VoteSite>,
    claims: VecDeque<VoteClaimLog>,
}

impl VotePanel {
    /// Build a panel from sites and claim logs ordered newest first
    pub fn new(sites: Vec<VoteSite>, claims: Vec<VoteClaimLog>) -> Self {
        let mut claims: VecDeque<_> = claims.into();
        claims.truncate(MAX_CLAIM_HISTORY);

        let mut panel = Self { sites, claims };
        panel.apply_cooldowns();
        panel
    }

    /// Fetch sites and, when logged in, the first page of claim logs.
    ///
    /// Failing to load the logs is not fatal: every site is then shown as
    /// claimable and the backend remains the authority on cooldowns.
    pub async fn load(client: &PortalClient, log_page_size: u32) -> Result<Self> {
        let sites = client.vote_sites().await?;

        let claims = if client.has_token() {
            match client.vote_logs(1, log_page_size).await {
                Ok(page) => page.items,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load vote logs");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        tracing::debug!(sites = sites.len(), claims = claims.len(), "Vote panel loaded");
        Ok(Self::new(sites, claims))
    }

    fn apply_cooldowns(&mut self) {
        let latest = cooldown::latest_next_available(&self.claims);
        for site in &mut self.sites {
            site.next_available_at = latest
                .get(&site.id)
                .copied()
                .flatten()
                .map(str::to_string);
        }
    }

    pub fn sites(&self) -> &[VoteSite] {
        &self.sites
    }

    /// Recent claims, newest first
    pub fn claims(&self) -> impl Iterator<Item = &VoteClaimLog> {
        self.claims.iter()
    }

    pub fn site(&self, site_id: i64) -> Option<&VoteSite> {
        self.sites.iter().find(|s| s.id == site_id)
    }

    /// Sites sorted by `(position, id)`
    pub fn ordered_sites(&self) -> Vec<&VoteSite> {
        let mut ordered: Vec<&VoteSite> = self.sites.iter().collect();
        ordered.sort_by_key(|s| (s.position, s.id));
        ordered
    }

    /// Remaining cooldown for a site; 0 for unknown sites
    pub fn remaining_ms(&self, site_id: i64, now: DateTime<Utc>) -> u64 {
        self.site(site_id)
            .map(|s| cooldown::remaining_ms(s.next_available_at.as_deref(), now))
            .unwrap_or(0)
    }

    pub fn is_claimable(&self, site_id: i64, now: DateTime<Utc>) -> bool {
        self.check_claimable(site_id, now).is_ok()
    }

    /// Why a claim would be refused without asking the backend, if at all
    pub fn check_claimable(&self, site_id: i64, now: DateTime<Utc>) -> Result<()> {
        let site = self.site(site_id).ok_or(Error::SiteNotFound(site_id))?;
        if !site.is_enabled {
            return Err(Error::SiteDisabled(site_id));
        }

        let remaining_ms = cooldown::remaining_ms(site.next_available_at.as_deref(), now);
        if remaining_ms > 0 {
            return Err(Error::CooldownActive { remaining_ms });
        }
        Ok(())
    }

    /// Record a successful claim: the site's cooldown restarts and the claim
    /// becomes the newest history entry.
    pub fn apply_claim(&mut self, response: &VoteClaimResponse) {
        if let Some(site) = self.sites.iter_mut().find(|s| s.id == response.site_id) {
            site.next_available_at = Some(response.next_available_at.clone());
        }

        self.claims.push_front(response.to_claim_log());
        self.claims.truncate(MAX_CLAIM_HISTORY);
    }

    /// Claim a site's reward. Refused locally, without a request, when the
    /// site is unknown, disabled or still cooling down.
    pub async fn claim(
        &mut self,
        client: &PortalClient,
        site_id: i64,
        now: DateTime<Utc>,
    ) -> Result<VoteClaimResponse> {
        self.check_claimable(site_id, now)?;

        let response = client.click_vote_site(site_id).await?;
        self.apply_claim(&response);
        Ok(response)
    }
}
