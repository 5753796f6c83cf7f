use crate::config::Config;
use crate::data_fetcher::models::{Competition, Player, StandingRow, Team};
use crate::error::AppError;
use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_leagues_url, build_standings_url, build_team_players_url, build_teams_url,
};

/// Client for the four apifootball actions the app uses.
///
/// Every operation issues exactly one GET request. Failures are logged and
/// handed back to the caller unchanged; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    country_id: String,
}

impl ApiClient {
    /// Creates a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            country_id: config.country_id.clone(),
        }
    }

    /// Fetches the competitions of the configured country, in upstream order.
    #[instrument(skip(self))]
    pub async fn fetch_competitions(&self) -> Result<Vec<Competition>, AppError> {
        let url = build_leagues_url(&self.base_url, &self.country_id, &self.api_key)?;
        let competitions: Vec<Competition> = fetch(&self.client, &url)
            .await
            .inspect_err(|e| error!("Error fetching competitions: {e}"))?;
        info!("Fetched {} competitions", competitions.len());
        Ok(competitions)
    }

    /// Fetches the teams of a league with their embedded rosters.
    ///
    /// Each returned team is stamped with `league_id`.
    #[instrument(skip(self))]
    pub async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError> {
        let url = build_teams_url(&self.base_url, league_id, &self.api_key)?;
        let mut teams: Vec<Team> = fetch(&self.client, &url)
            .await
            .inspect_err(|e| error!("Error fetching teams: {e}"))?;
        for team in &mut teams {
            team.league_id = Some(league_id.to_string());
        }
        info!("Fetched {} teams for league {league_id}", teams.len());
        Ok(teams)
    }

    /// Fetches the roster of one team.
    ///
    /// The upstream answer is a list of teams; the roster of the entry whose
    /// `team_key` equals `team_id` is returned. When no entry matches, the
    /// result is an empty roster.
    #[instrument(skip(self))]
    pub async fn fetch_players(
        &self,
        team_id: &str,
        league_id: &str,
    ) -> Result<Vec<Player>, AppError> {
        let url = build_team_players_url(&self.base_url, team_id, league_id, &self.api_key)?;
        let teams: Vec<Team> = fetch(&self.client, &url)
            .await
            .inspect_err(|e| error!("Error fetching players: {e}"))?;

        match teams.into_iter().find(|team| team.team_key == team_id) {
            Some(team) => {
                info!("Fetched {} players for team {team_id}", team.players.len());
                Ok(team.players)
            }
            None => {
                warn!("No team {team_id} in the roster response for league {league_id}");
                Ok(Vec::new())
            }
        }
    }

    /// Fetches the league table of a league.
    #[instrument(skip(self))]
    pub async fn fetch_standings(&self, league_id: &str) -> Result<Vec<StandingRow>, AppError> {
        let url = build_standings_url(&self.base_url, league_id, &self.api_key)?;
        let standings: Vec<StandingRow> = fetch(&self.client, &url)
            .await
            .inspect_err(|e| error!("Error fetching standings: {e}"))?;
        info!("Fetched {} standing rows for league {league_id}", standings.len());
        Ok(standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn create_mock_client(server: &MockServer) -> ApiClient {
        let config = Config {
            api_base_url: server.uri(),
            ..Config::with_api_key("test-key")
        };
        ApiClient::with_client(create_test_http_client(), &config)
    }

    fn teams_payload() -> serde_json::Value {
        json!([
            {
                "team_key": "141",
                "team_name": "Arsenal",
                "team_badge": "https://badges/141.png",
                "players": [
                    {"player_key": 1, "player_name": "D. Raya", "player_number": "22", "player_image": ""},
                    {"player_key": 2, "player_name": "B. Saka", "player_number": "7", "player_image": "https://p/2.png"}
                ]
            },
            {
                "team_key": "80",
                "team_name": "Liverpool",
                "team_badge": "https://badges/80.png",
                "players": []
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_competitions_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("action", "get_leagues"))
            .and(query_param("country_id", "6"))
            .and(query_param("APIkey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"league_id": "6", "league_name": "Championship", "league_logo": "https://l/6.png"},
                {"league_id": "152", "league_name": "Premier League", "league_logo": ""}
            ])))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let competitions = client.fetch_competitions().await.unwrap();

        assert_eq!(competitions.len(), 2);
        assert_eq!(competitions[0].league_id, "6");
        assert_eq!(competitions[1].league_name, "Premier League");
        assert_eq!(competitions[1].league_logo, None);
    }

    #[tokio::test]
    async fn test_fetch_teams_stamps_league_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("action", "get_teams"))
            .and(query_param("league_id", "152"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_payload()))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let teams = client.fetch_teams("152").await.unwrap();

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.league_id.as_deref() == Some("152")));
        assert_eq!(teams[0].players.len(), 2);
        assert!(teams[1].players.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_players_returns_matching_roster() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("action", "get_team_players"))
            .and(query_param("team_id", "141"))
            .and(query_param("league_id", "152"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_payload()))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let players = client.fetch_players("141", "152").await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].player_name, "B. Saka");
    }

    #[tokio::test]
    async fn test_fetch_players_without_match_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("action", "get_team_players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_payload()))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let players = client.fetch_players("999", "152").await.unwrap();

        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_standings_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("action", "get_standings"))
            .and(query_param("league_id", "152"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"team_id": "141", "team_name": "Arsenal", "team_badge": "https://b/141.png",
                 "overall_league_position": "1", "overall_league_PTS": "89"},
                {"team_id": "80", "team_name": "Liverpool", "team_badge": "https://b/80.png",
                 "overall_league_position": "2", "overall_league_PTS": "82"}
            ])))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let standings = client.fetch_standings("152").await.unwrap();

        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|row| !row.team_id.is_empty()));
        assert_eq!(standings[0].overall_league_position, 1);
        assert_eq!(standings[1].points, 82);
    }

    #[tokio::test]
    async fn test_upstream_error_body_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": 404,
                "message": "No standings found (please check your plan)!!"
            })))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let result = client.fetch_standings("1").await;

        match result {
            Err(AppError::ApiUpstream { code, url, .. }) => {
                assert_eq!(code, 404);
                assert!(url.contains("APIkey=***"));
                assert!(!url.contains("test-key"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let result = client.fetch_teams("152").await;

        assert!(matches!(result, Err(AppError::ApiServerError { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_service_unavailable_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let result = client.fetch_competitions().await;

        assert!(matches!(
            result,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let result = client.fetch_competitions().await;

        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let client = create_mock_client(&mock_server);
        let result = client.fetch_standings("152").await;

        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1 of the loopback interface.
        let config = Config {
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::with_api_key("test-key")
        };
        let client = ApiClient::with_client(create_test_http_client(), &config);

        let result = client.fetch_competitions().await;

        let err = result.unwrap_err();
        assert!(err.is_transport(), "expected transport error, got {err:?}");
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let config = Config {
            api_base_url: mock_server.uri(),
            http_timeout_seconds: 1,
            ..Config::with_api_key("test-key")
        };
        let client = ApiClient::new(&config).unwrap();

        let result = client.fetch_competitions().await;

        assert!(matches!(result, Err(AppError::NetworkTimeout { .. })));
    }
}
