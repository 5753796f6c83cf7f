use football_terminal::{
    ApiClient, Config, FootballDataProvider, Runtime,
    commands::collect_once_state,
    constants::alerts,
    screen::Action,
    testing_utils::PropertyTesting,
    ui::render_plain,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_KEY: &str = "integration-key";

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_base_url: server.uri(),
        http_timeout_seconds: 5,
        ..Config::with_api_key(API_KEY)
    };
    ApiClient::new(&config).unwrap()
}

async fn mount_action(server: &MockServer, action: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("action", action))
        .and(query_param("APIkey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_league(server: &MockServer) {
    mount_action(
        server,
        "get_leagues",
        json!([
            {"league_id": "6", "league_name": "Championship", "country_name": "England"},
            {"league_id": 152, "league_name": "Premier League", "country_name": "England",
             "league_logo": "https://apiv3.apifootball.com/badges/logo_leagues/152_premier-league.png"}
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_standings"))
        .and(query_param("league_id", "152"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"team_id": "141", "team_name": "Arsenal", "team_badge": "https://b/141.png",
             "overall_league_position": "1", "overall_league_payed": "10",
             "overall_league_W": "8", "overall_league_D": "1", "overall_league_L": "1",
             "overall_league_GF": "22", "overall_league_GA": "7", "overall_league_PTS": "25"},
            {"team_id": 80, "team_name": "Liverpool", "team_badge": "https://b/80.png",
             "overall_league_position": "2", "overall_league_PTS": "23"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_teams"))
        .and(query_param("league_id", "152"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"team_key": "141", "team_name": "Arsenal", "team_badge": "https://b/141.png",
             "players": [
                {"player_key": 1, "player_name": "D. Raya", "player_number": "22", "player_image": ""},
                {"player_key": 7, "player_name": "B. Saka", "player_number": "7",
                 "player_image": "https://p/7.png", "player_type": "Forwards"}
             ]},
            {"team_key": 80, "team_name": "Liverpool", "team_badge": "https://b/80.png",
             "players": [
                {"player_key": 11, "player_name": "M. Salah", "player_number": "11"}
             ]}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_browse_league_end_to_end() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    let mut runtime = Runtime::new(Arc::new(client_for(&server)));

    runtime.dispatch(Action::Mount);
    runtime.run_until_idle().await;
    assert_eq!(runtime.state().competitions.len(), 2);
    assert_eq!(runtime.state().competitions[1].league_id, "152");

    runtime.dispatch(Action::SelectCompetition("152".to_string()));
    runtime.run_until_idle().await;

    let state = runtime.state();
    assert_eq!(state.standings.len(), 2);
    assert_eq!(state.standings[1].team_id, "80");
    assert!(PropertyTesting::validate_standings(&state.standings).is_ok());
    assert!(PropertyTesting::validate_rosters(&state.teams).is_ok());
    assert_eq!(state.selected_team.as_deref(), Some("141"));
    assert_eq!(state.players.len(), 2);
    assert_eq!(state.selected_badge.as_deref(), Some("https://b/141.png"));
    assert!(state.teams.iter().all(|t| t.league_id.as_deref() == Some("152")));

    runtime.dispatch(Action::SelectTeam("80".to_string()));
    let state = runtime.state();
    assert_eq!(state.players.len(), 1);
    assert_eq!(state.players[0].player_name, "M. Salah");
    assert_eq!(state.selected_badge.as_deref(), Some("https://b/80.png"));

    runtime.dispatch(Action::SelectStanding("141".to_string()));
    let state = runtime.state();
    assert_eq!(state.selected_badge.as_deref(), Some("https://b/141.png"));
    assert_eq!(state.players[0].player_name, "M. Salah");
}

#[tokio::test]
async fn test_standings_server_error_keeps_teams() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "get_leagues",
        json!([{"league_id": "152", "league_name": "Premier League"}]),
    )
    .await;
    Mock::given(method("GET"))
        .and(query_param("action", "get_standings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    mount_action(
        &server,
        "get_teams",
        json!([{"team_key": "141", "team_name": "Arsenal", "players": []}]),
    )
    .await;

    let state = collect_once_state(Arc::new(client_for(&server)), Some("152"), None).await;

    assert!(state.standings.is_empty());
    assert_eq!(state.current_alert(), Some(alerts::STANDINGS));
    assert_eq!(state.teams.len(), 1);
    assert_eq!(state.selected_team.as_deref(), Some("141"));
    assert!(state.players.is_empty());
}

#[tokio::test]
async fn test_upstream_error_payload_raises_alert() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "get_leagues",
        json!({"error": 401, "message": "Invalid API key"}),
    )
    .await;

    let state = collect_once_state(Arc::new(client_for(&server)), None, None).await;

    assert!(state.competitions.is_empty());
    assert_eq!(state.current_alert(), Some(alerts::COMPETITIONS));
}

#[tokio::test]
async fn test_fetch_players_through_provider_trait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "get_team_players"))
        .and(query_param("league_id", "152"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"team_key": "141", "team_name": "Arsenal", "players": [
                {"player_key": 7, "player_name": "B. Saka", "player_number": "7"}
            ]}
        ])))
        .mount(&server)
        .await;

    let provider: Arc<dyn FootballDataProvider> = Arc::new(client_for(&server));
    let players = provider.fetch_players("141", "152").await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_key, "7");

    // Upstream returned a different team: explicit empty roster
    let none = provider.fetch_players("999", "152").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_once_output_lists_selected_roster() {
    let server = MockServer::start().await;
    mount_league(&server).await;

    let state =
        collect_once_state(Arc::new(client_for(&server)), Some("152"), Some("80")).await;
    let output = render_plain(&state, false);

    assert!(output.contains("Premier League (England)"));
    assert!(output.contains("STANDINGS · Premier League"));
    assert!(output.contains("PLAYERS · Liverpool"));
    assert!(output.contains("M. Salah"));
    assert!(output.contains("Badge: https://b/80.png"));
}
