use super::common::{empty_as_none, null_as_empty, string_or_number};
use super::players::Player;
use serde::{Deserialize, Serialize};

/// A team with its embedded roster, as returned by `get_teams` and `get_team_players`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    #[serde(deserialize_with = "string_or_number")]
    pub team_key: String,
    pub team_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub team_badge: Option<String>,
    /// Not part of the upstream payload; stamped by the client with the requested league.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub league_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players: Vec<Player>,
}

/// Returns the roster of the team whose key equals `team_id`.
///
/// A missing team yields an empty roster rather than an error; callers that
/// need to tell the two apart should look the team up themselves.
pub fn roster_for(teams: &[Team], team_id: &str) -> Vec<Player> {
    teams
        .iter()
        .find(|team| team.team_key == team_id)
        .map(|team| team.players.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(key: &str, players: &[(&str, &str)]) -> Team {
        Team {
            team_key: key.to_string(),
            team_name: format!("Team {key}"),
            team_badge: Some(format!("https://badges/{key}.png")),
            league_id: Some("152".to_string()),
            players: players
                .iter()
                .map(|(k, n)| Player {
                    player_key: k.to_string(),
                    player_name: n.to_string(),
                    player_number: String::new(),
                    player_image: None,
                    player_type: None,
                    player_age: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_team_from_api_payload() {
        let json = r#"{
            "team_key": "141",
            "team_name": "Arsenal",
            "team_country": "England",
            "team_founded": "1886",
            "team_badge": "https://apiv3.apifootball.com/badges/141_arsenal.jpg",
            "venue": {"venue_name": "Emirates Stadium"},
            "players": [
                {"player_image": "", "player_name": "D. Raya", "player_key": 2405542950,
                 "player_number": "22", "player_type": "Goalkeepers", "player_age": "28"}
            ],
            "coaches": [{"coach_name": "M. Arteta"}]
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.team_key, "141");
        assert_eq!(team.league_id, None);
        assert_eq!(team.players.len(), 1);
        assert_eq!(team.players[0].player_key, "2405542950");
        assert_eq!(team.players[0].player_image, None);
    }

    #[test]
    fn test_team_without_players_field() {
        let json = r#"{"team_key": 5, "team_name": "Nobody FC"}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert!(team.players.is_empty());
        assert_eq!(team.team_badge, None);
    }

    #[test]
    fn test_roster_for_matching_team() {
        let teams = vec![team("1", &[("10", "A")]), team("2", &[("20", "B"), ("21", "C")])];
        let roster = roster_for(&teams, "2");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].player_name, "B");
        assert_eq!(roster, roster_for(&teams, "2"));
    }

    #[test]
    fn test_roster_for_unknown_team_is_empty() {
        let teams = vec![team("1", &[("10", "A")])];
        assert!(roster_for(&teams, "99").is_empty());
        assert!(roster_for(&[], "1").is_empty());
    }

    #[test]
    fn test_null_roster_is_empty() {
        let json = r#"[{"team_key":"1","team_name":"A","players":null}]"#;
        let teams: Vec<Team> = serde_json::from_str(json).unwrap();
        assert_eq!(teams.len(), 1);
        assert!(teams[0].players.is_empty());
        assert!(roster_for(&teams, "1").is_empty());
    }
}
