//! URL building utilities for apifootball actions
//!
//! Every request goes to the same base URL; the action and its parameters
//! travel in the query string, with the API key appended last.

use crate::constants::actions;
use crate::error::AppError;
use reqwest::Url;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "APIkey";

/// Builds the URL for an apifootball action.
///
/// # Example
/// ```
/// use football_terminal::data_fetcher::api::build_action_url;
///
/// let url = build_action_url("https://api.example.com", "get_teams", &[("league_id", "152")], "k")
///     .unwrap();
/// assert_eq!(url, "https://api.example.com/?action=get_teams&league_id=152&APIkey=k");
/// ```
pub fn build_action_url(
    base_url: &str,
    action: &str,
    params: &[(&str, &str)],
    api_key: &str,
) -> Result<String, AppError> {
    let mut url = Url::parse(base_url).map_err(|e| {
        AppError::config_error(format!("Invalid API base URL '{base_url}': {e}"))
    })?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("action", action);
        for (name, value) in params {
            query.append_pair(name, value);
        }
        query.append_pair(API_KEY_PARAM, api_key);
    }
    Ok(url.to_string())
}

/// Builds the `get_leagues` URL for a country.
pub fn build_leagues_url(base_url: &str, country_id: &str, api_key: &str) -> Result<String, AppError> {
    build_action_url(base_url, actions::GET_LEAGUES, &[("country_id", country_id)], api_key)
}

/// Builds the `get_teams` URL for a league.
pub fn build_teams_url(base_url: &str, league_id: &str, api_key: &str) -> Result<String, AppError> {
    build_action_url(base_url, actions::GET_TEAMS, &[("league_id", league_id)], api_key)
}

/// Builds the `get_team_players` URL for a team within a league.
pub fn build_team_players_url(
    base_url: &str,
    team_id: &str,
    league_id: &str,
    api_key: &str,
) -> Result<String, AppError> {
    build_action_url(
        base_url,
        actions::GET_TEAM_PLAYERS,
        &[("team_id", team_id), ("league_id", league_id)],
        api_key,
    )
}

/// Builds the `get_standings` URL for a league.
pub fn build_standings_url(
    base_url: &str,
    league_id: &str,
    api_key: &str,
) -> Result<String, AppError> {
    build_action_url(base_url, actions::GET_STANDINGS, &[("league_id", league_id)], api_key)
}

/// Replaces the API key value in a URL so it can be logged.
///
/// # Example
/// ```
/// use football_terminal::data_fetcher::api::redact_api_key;
///
/// assert_eq!(
///     redact_api_key("https://api.example.com/?action=get_leagues&APIkey=secret"),
///     "https://api.example.com/?action=get_leagues&APIkey=***"
/// );
/// ```
pub fn redact_api_key(url: &str) -> String {
    let marker = format!("{API_KEY_PARAM}=");
    let Some(start) = url.find(&marker).map(|i| i + marker.len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);
    format!("{}***{}", &url[..start], &url[end..])
}
