use super::common::{empty_as_none, string_or_number};
use serde::{Deserialize, Serialize};

/// A football competition as returned by `get_leagues`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Competition {
    #[serde(deserialize_with = "string_or_number")]
    pub league_id: String,
    pub league_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub league_logo: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub country_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub league_season: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_from_api_payload() {
        let json = r#"{
            "country_id": "6",
            "country_name": "England",
            "league_id": "152",
            "league_name": "Premier League",
            "league_season": "2023/2024",
            "league_logo": "https://apiv3.apifootball.com/badges/logo_leagues/152_premier-league.png",
            "country_logo": "https://apiv3.apifootball.com/badges/logo_country/44_england.png"
        }"#;

        let competition: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(competition.league_id, "152");
        assert_eq!(competition.league_name, "Premier League");
        assert_eq!(competition.country_name.as_deref(), Some("England"));
        assert_eq!(competition.league_season.as_deref(), Some("2023/2024"));
        assert!(competition.league_logo.unwrap().ends_with("152_premier-league.png"));
    }

    #[test]
    fn test_competition_without_logo() {
        let json = r#"{"league_id": 3, "league_name": "Cup", "league_logo": ""}"#;
        let competition: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(competition.league_id, "3");
        assert_eq!(competition.league_logo, None);
        assert_eq!(competition.country_id, None);
    }
}
