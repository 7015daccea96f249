//! Online-player rosters and realm status

use super::PortalClient;
use crate::error::Result;
use crate::models::game::Realms;
use crate::models::{OnlineRealm, RealmStatus};

impl PortalClient {
    /// Characters online on every reachable realm; offline realms are omitted
    /// by the backend
    pub async fn online(&self, page: u32, page_size: u32) -> Result<Vec<OnlineRealm>> {
        let realms: Realms<OnlineRealm> = self
            .get_json_with(&["online"], &[("page", page), ("page_size", page_size)])
            .await?;
        Ok(realms.realms)
    }

    /// Population and status of every configured realm
    pub async fn realm_status(&self) -> Result<Vec<RealmStatus>> {
        let realms: Realms<RealmStatus> = self.get_json(&["realm_status"]).await?;
        Ok(realms.realms)
    }
}
