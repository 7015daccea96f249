//! Read-only game data: online rosters, PvP ladders, armory and profiles

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::Pagination;

/// Realm list wrapper used by `/online`, `/top_pvp`, `/arena_top`, ...
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Realms<T> {
    #[serde(default = "Vec::new")]
    pub realms: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineCharacter {
    pub guid: i64,
    pub name: String,
    #[serde(default)]
    pub race: i64,
    #[serde(default)]
    pub class: i64,
    #[serde(default)]
    pub gender: i64,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub guild: Option<String>,
    #[serde(default)]
    pub faction: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineRealm {
    pub realm_id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub characters: Vec<OnlineCharacter>,
}

/// Entry of `/realm_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmStatus {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub online: i64,
    #[serde(default)]
    pub alliance: i64,
    #[serde(default)]
    pub horde: i64,
    #[serde(default)]
    pub uptime: Option<Value>,
    #[serde(default)]
    pub status: String,
}

impl RealmStatus {
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPvpPlayer {
    pub guid: i64,
    pub name: String,
    #[serde(default)]
    pub race: i64,
    #[serde(default)]
    pub class: i64,
    #[serde(default)]
    pub gender: i64,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub guild: Option<String>,
    #[serde(default)]
    pub totalkill: i64,
    #[serde(default)]
    pub faction: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPvpRealm {
    pub realm_id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub players: Vec<TopPvpPlayer>,
}

/// Arena team size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bracket {
    #[serde(rename = "2v2")]
    TwoVsTwo,
    #[serde(rename = "3v3")]
    ThreeVsThree,
    #[serde(rename = "5v5")]
    FiveVsFive,
}

impl Bracket {
    pub fn all() -> [Bracket; 3] {
        [Self::TwoVsTwo, Self::ThreeVsThree, Self::FiveVsFive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoVsTwo => "2v2",
            Self::ThreeVsThree => "3v3",
            Self::FiveVsFive => "5v5",
        }
    }

    /// Team size, which is also the arena team `type` column
    pub fn team_size(&self) -> i64 {
        match self {
            Self::TwoVsTwo => 2,
            Self::ThreeVsThree => 3,
            Self::FiveVsFive => 5,
        }
    }

    pub fn from_team_size(size: i64) -> Option<Self> {
        match size {
            2 => Some(Self::TwoVsTwo),
            3 => Some(Self::ThreeVsThree),
            5 => Some(Self::FiveVsFive),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "2v2" | "2" => Some(Self::TwoVsTwo),
            "3v3" | "3" => Some(Self::ThreeVsThree),
            "5v5" | "5" => Some(Self::FiveVsFive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub captain_guid: i64,
    #[serde(rename = "type", default)]
    pub team_type: i64,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub season_games: i64,
    #[serde(default)]
    pub season_wins: i64,
    #[serde(default)]
    pub season_win_ratio: f64,
    #[serde(default)]
    pub week_games: i64,
    #[serde(default)]
    pub week_wins: i64,
    #[serde(default)]
    pub week_win_ratio: f64,
    #[serde(default)]
    pub rank: i64,
}

/// Ladder standings partitioned by bracket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaBrackets {
    #[serde(rename = "2v2", default)]
    pub two: Vec<ArenaTeam>,
    #[serde(rename = "3v3", default)]
    pub three: Vec<ArenaTeam>,
    #[serde(rename = "5v5", default)]
    pub five: Vec<ArenaTeam>,
}

impl ArenaBrackets {
    pub fn teams(&self, bracket: Bracket) -> &[ArenaTeam] {
        match bracket {
            Bracket::TwoVsTwo => &self.two,
            Bracket::ThreeVsThree => &self.three,
            Bracket::FiveVsFive => &self.five,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaRealmLadders {
    pub realm_id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub teams: ArenaBrackets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaTeamMember {
    pub guid: i64,
    pub name: String,
    #[serde(default)]
    pub race: i64,
    #[serde(default)]
    pub class: i64,
    #[serde(default)]
    pub gender: Option<i64>,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub season_games: i64,
    #[serde(default)]
    pub season_wins: i64,
    #[serde(default)]
    pub season_win_ratio: f64,
    #[serde(default)]
    pub week_games: i64,
    #[serde(default)]
    pub week_wins: i64,
    #[serde(default)]
    pub week_win_ratio: f64,
    #[serde(default)]
    pub personal_rating: i64,
}

/// One realm's view of an arena team: `team` is `None` when the realm does
/// not know the team id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaTeamRealm {
    pub realm_id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub team: Option<Value>,
    #[serde(default)]
    pub members: Vec<ArenaTeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmoryArenaTeam {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub team_type: i64,
    #[serde(default)]
    pub personal_rating: i64,
    #[serde(default)]
    pub season_games: i64,
    #[serde(default)]
    pub season_wins: i64,
    #[serde(default)]
    pub season_win_ratio: f64,
    #[serde(default)]
    pub week_games: i64,
    #[serde(default)]
    pub week_wins: i64,
    #[serde(default)]
    pub week_win_ratio: f64,
}

/// `GET /armory/{realm_id}/{guid}`; character and equipment are passed through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterArmory {
    pub realm_id: i64,
    #[serde(default)]
    pub realm_name: Option<String>,
    #[serde(default)]
    pub character: Option<Value>,
    #[serde(default)]
    pub equipment_sets: Vec<Value>,
    #[serde(default)]
    pub arena_teams: Vec<ArmoryArenaTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCharacter {
    pub realm_id: i64,
    #[serde(default)]
    pub realm_name: String,
    pub name: String,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub race: i64,
    #[serde(default)]
    pub class: i64,
    #[serde(default)]
    pub gender: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub gravatar: String,
    #[serde(default)]
    pub avatar_fallback: String,
    #[serde(default)]
    pub has_email: bool,
    #[serde(default)]
    pub characters: Vec<ProfileCharacter>,
}
