//! Data provider abstraction used by the screen.
//!
//! The screen only needs the four apifootball operations; depending on a
//! trait object keeps it independent of HTTP so tests can swap in fixtures.

use async_trait::async_trait;

use super::api::ApiClient;
use super::models::{Competition, Player, StandingRow, Team};
use crate::error::AppError;

#[async_trait]
pub trait FootballDataProvider: Send + Sync {
    async fn fetch_competitions(&self) -> Result<Vec<Competition>, AppError>;

    async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError>;

    async fn fetch_players(&self, team_id: &str, league_id: &str)
    -> Result<Vec<Player>, AppError>;

    async fn fetch_standings(&self, league_id: &str) -> Result<Vec<StandingRow>, AppError>;
}

#[async_trait]
impl FootballDataProvider for ApiClient {
    async fn fetch_competitions(&self) -> Result<Vec<Competition>, AppError> {
        ApiClient::fetch_competitions(self).await
    }

    async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError> {
        ApiClient::fetch_teams(self, league_id).await
    }

    async fn fetch_players(
        &self,
        team_id: &str,
        league_id: &str,
    ) -> Result<Vec<Player>, AppError> {
        ApiClient::fetch_players(self, team_id, league_id).await
    }

    async fn fetch_standings(&self, league_id: &str) -> Result<Vec<StandingRow>, AppError> {
        ApiClient::fetch_standings(self, league_id).await
    }
}
