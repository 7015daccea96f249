//! PvP ladders: honorable kills, arena standings, arena teams and armory

use super::PortalClient;
use crate::error::Result;
use crate::models::game::Realms;
use crate::models::{ArenaRealmLadders, ArenaTeamRealm, CharacterArmory, TopPvpRealm};

impl PortalClient {
    /// Top `limit` players by total kills, per realm
    pub async fn top_pvp(&self, limit: u32) -> Result<Vec<TopPvpRealm>> {
        let realms: Realms<TopPvpRealm> = self
            .get_json_with(&["top_pvp"], &[("limit", limit)])
            .await?;
        Ok(realms.realms)
    }

    /// Arena ladders per realm, split by bracket
    pub async fn arena_top(&self) -> Result<Vec<ArenaRealmLadders>> {
        let realms: Realms<ArenaRealmLadders> = self.get_json(&["arena_top"]).await?;
        Ok(realms.realms)
    }

    /// An arena team and its members as seen by each realm
    pub async fn arena_team(&self, team_id: i64) -> Result<Vec<ArenaTeamRealm>> {
        let realms: Realms<ArenaTeamRealm> = self
            .get_json(&["arena_team", &team_id.to_string()])
            .await?;
        Ok(realms.realms)
    }

    pub async fn armory(&self, realm_id: i64, guid: i64) -> Result<CharacterArmory> {
        self.get_json(&["armory", &realm_id.to_string(), &guid.to_string()])
            .await
    }
}
