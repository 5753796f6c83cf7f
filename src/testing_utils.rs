//! Fixtures and an in-memory data provider for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::data_fetcher::FootballDataProvider;
use crate::data_fetcher::models::{Competition, Player, StandingRow, Team, roster_for};
use crate::error::AppError;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub fn competition(league_id: &str, league_name: &str) -> Competition {
        Competition {
            league_id: league_id.to_string(),
            league_name: league_name.to_string(),
            league_logo: Some(format!("https://logos.test/{league_id}.png")),
            country_id: Some("6".to_string()),
            country_name: Some("England".to_string()),
            league_season: Some("2024/2025".to_string()),
        }
    }

    /// Creates a standings row whose badge matches [`TestDataBuilder::team`].
    pub fn standing(team_id: &str, team_name: &str, position: u32) -> StandingRow {
        StandingRow {
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            team_badge: Some(Self::badge(team_id)),
            overall_league_position: position,
            played: 10,
            won: 10u32.saturating_sub(position),
            drawn: 0,
            lost: position.min(10),
            goals_for: 20,
            goals_against: 10 + position,
            points: 3 * 10u32.saturating_sub(position),
        }
    }

    pub fn player(player_key: &str, player_name: &str, number: u32) -> Player {
        Player {
            player_key: player_key.to_string(),
            player_name: player_name.to_string(),
            player_number: number.to_string(),
            player_image: Some(format!("https://photos.test/{player_key}.jpg")),
            player_type: Some("Midfielders".to_string()),
            player_age: Some("25".to_string()),
        }
    }

    pub fn team(team_key: &str, team_name: &str, players: Vec<Player>) -> Team {
        Team {
            team_key: team_key.to_string(),
            team_name: team_name.to_string(),
            team_badge: Some(Self::badge(team_key)),
            league_id: None,
            players,
        }
    }

    /// Creates a team with `size` players keyed `<team_key>-<n>`.
    pub fn team_with_roster(team_key: &str, team_name: &str, size: usize) -> Team {
        let players = (1..=size)
            .map(|n| {
                Self::player(
                    &format!("{team_key}-{n}"),
                    &format!("{team_name} Player {n}"),
                    n as u32,
                )
            })
            .collect();
        Self::team(team_key, team_name, players)
    }

    pub fn badge(team_key: &str) -> String {
        format!("https://badges.test/{team_key}.png")
    }
}

/// Checks on fetched data that hold for any well-formed league
pub struct PropertyTesting;

impl PropertyTesting {
    /// Every row needs a team id and a position of at least 1.
    pub fn validate_standings(rows: &[StandingRow]) -> Result<(), String> {
        for (i, row) in rows.iter().enumerate() {
            if row.team_id.is_empty() {
                return Err(format!("Standings row {i} has an empty team id"));
            }
            if row.overall_league_position == 0 {
                return Err(format!("Standings row {i} has position 0"));
            }
        }
        Ok(())
    }

    /// Player keys must be unique within each team's roster.
    pub fn validate_rosters(teams: &[Team]) -> Result<(), String> {
        for team in teams {
            let mut seen = HashSet::new();
            for player in &team.players {
                if !seen.insert(player.player_key.as_str()) {
                    return Err(format!(
                        "Team {} lists player {} twice",
                        team.team_key, player.player_key
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum FailurePoint {
    Competitions,
    Standings(String),
    Teams(String),
}

/// In-memory [`FootballDataProvider`] with per-call failure injection.
#[derive(Default)]
pub struct FakeProvider {
    competitions: Vec<Competition>,
    standings: HashMap<String, Vec<StandingRow>>,
    teams: HashMap<String, Vec<Team>>,
    failures: HashSet<FailurePoint>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_competitions(mut self, competitions: Vec<Competition>) -> Self {
        self.competitions = competitions;
        self
    }

    pub fn with_league(
        mut self,
        league_id: &str,
        standings: Vec<StandingRow>,
        teams: Vec<Team>,
    ) -> Self {
        self.standings.insert(league_id.to_string(), standings);
        self.teams.insert(league_id.to_string(), teams);
        self
    }

    /// Delays every league-scoped call for `league_id`.
    pub fn with_delay(mut self, league_id: &str, delay: Duration) -> Self {
        self.delays.insert(league_id.to_string(), delay);
        self
    }

    pub fn fail_competitions(mut self) -> Self {
        self.failures.insert(FailurePoint::Competitions);
        self
    }

    pub fn fail_standings(mut self, league_id: &str) -> Self {
        self.failures
            .insert(FailurePoint::Standings(league_id.to_string()));
        self
    }

    pub fn fail_teams(mut self, league_id: &str) -> Self {
        self.failures.insert(FailurePoint::Teams(league_id.to_string()));
        self
    }

    /// Calls made so far, as `action:args` strings in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn pause(&self, league_id: &str) {
        if let Some(delay) = self.delays.get(league_id) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn check(&self, point: FailurePoint, url: &str) -> Result<(), AppError> {
        if self.failures.contains(&point) {
            Err(AppError::network_connection(url, "connection refused"))
        } else {
            Ok(())
        }
    }

    fn unknown_league(league_id: &str, url: &str) -> AppError {
        AppError::api_upstream(404, format!("No league found ({league_id})"), url)
    }
}

#[async_trait]
impl FootballDataProvider for FakeProvider {
    async fn fetch_competitions(&self) -> Result<Vec<Competition>, AppError> {
        self.record("get_leagues".to_string());
        self.check(FailurePoint::Competitions, "fake://get_leagues")?;
        Ok(self.competitions.clone())
    }

    async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError> {
        self.record(format!("get_teams:{league_id}"));
        self.pause(league_id).await;
        let url = format!("fake://get_teams/{league_id}");
        self.check(FailurePoint::Teams(league_id.to_string()), &url)?;
        let teams = self
            .teams
            .get(league_id)
            .ok_or_else(|| Self::unknown_league(league_id, &url))?;
        Ok(teams
            .iter()
            .cloned()
            .map(|team| Team {
                league_id: Some(league_id.to_string()),
                ..team
            })
            .collect())
    }

    async fn fetch_players(&self, team_id: &str, league_id: &str) -> Result<Vec<Player>, AppError> {
        self.record(format!("get_team_players:{team_id}:{league_id}"));
        self.pause(league_id).await;
        let url = format!("fake://get_team_players/{league_id}");
        self.check(FailurePoint::Teams(league_id.to_string()), &url)?;
        let teams = self
            .teams
            .get(league_id)
            .ok_or_else(|| Self::unknown_league(league_id, &url))?;
        Ok(roster_for(teams, team_id))
    }

    async fn fetch_standings(&self, league_id: &str) -> Result<Vec<StandingRow>, AppError> {
        self.record(format!("get_standings:{league_id}"));
        self.pause(league_id).await;
        let url = format!("fake://get_standings/{league_id}");
        self.check(FailurePoint::Standings(league_id.to_string()), &url)?;
        self.standings
            .get(league_id)
            .cloned()
            .ok_or_else(|| Self::unknown_league(league_id, &url))
    }
}
