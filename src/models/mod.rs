//! Request and response DTOs mirrored from the portal backend
//!
//! Everything here is owned by the backend; the client only holds transient
//! copies. Unknown fields are ignored and optional fields default to `None`
//! so that backend additions never break decoding.

pub mod account;
pub mod forum;
pub mod game;
pub mod news;
pub mod vote;

pub use account::{LoginResponse, UserMe};
pub use forum::{
    CategoryDraft, CategoryPatch, ForumCategory, ForumPost, ForumTopic, TopicDetail,
};
pub use game::{
    ArenaBrackets, ArenaRealmLadders, ArenaTeam, ArenaTeamMember, ArenaTeamRealm,
    ArmoryArenaTeam, Bracket, CharacterArmory, OnlineCharacter, OnlineRealm, ProfileCharacter,
    RealmStatus, TopPvpPlayer, TopPvpRealm, UserProfile,
};
pub use news::{NewsComment, NewsDraft, NewsItem, NewsPatch};
pub use vote::{VoteClaimLog, VoteClaimResponse, VoteSite, VoteSiteDraft, VoteSitePatch};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{ "content": ... }` body shared by forum posts and news comments
#[derive(Debug, Serialize)]
pub(crate) struct ContentBody<'a> {
    pub content: &'a str,
}

/// Decode a flag the backend may send as `true`/`false`, `0`/`1` or `null`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    })
}

/// Decode an integer that may arrive as `null`.
pub(crate) fn int_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Faction code as the backend encodes it: 1 horde, 2 alliance, 0 unknown.
pub fn faction_name(faction: i64) -> &'static str {
    match faction {
        1 => "Horde",
        2 => "Alliance",
        _ => "Unknown",
    }
}
