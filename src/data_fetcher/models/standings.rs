use super::common::{empty_as_none, lenient_u32, string_or_number};
use serde::{Deserialize, Serialize};

/// One row of a league table as returned by `get_standings`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StandingRow {
    #[serde(deserialize_with = "string_or_number")]
    pub team_id: String,
    pub team_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub team_badge: Option<String>,
    #[serde(deserialize_with = "lenient_u32")]
    pub overall_league_position: u32,
    #[serde(rename = "overall_league_payed", default, deserialize_with = "lenient_u32")]
    pub played: u32,
    #[serde(rename = "overall_league_W", default, deserialize_with = "lenient_u32")]
    pub won: u32,
    #[serde(rename = "overall_league_D", default, deserialize_with = "lenient_u32")]
    pub drawn: u32,
    #[serde(rename = "overall_league_L", default, deserialize_with = "lenient_u32")]
    pub lost: u32,
    #[serde(rename = "overall_league_GF", default, deserialize_with = "lenient_u32")]
    pub goals_for: u32,
    #[serde(rename = "overall_league_GA", default, deserialize_with = "lenient_u32")]
    pub goals_against: u32,
    #[serde(rename = "overall_league_PTS", default, deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl StandingRow {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}
