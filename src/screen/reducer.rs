use tracing::{debug, trace, warn};

use super::action::{Action, Effect};
use super::state::{ScreenState, Slot};
use crate::constants::alerts;
use crate::data_fetcher::models::roster_for;

/// Pure screen reducer.
///
/// Takes the current snapshot and an action, returns the next snapshot and the
/// fetches to start. No I/O happens here.
pub fn reduce(state: ScreenState, action: Action) -> (ScreenState, Effect) {
    match action {
        Action::Mount => {
            let mut new_state = state;
            let token = new_state.issue_token(Slot::Competitions);
            debug!("SCREEN: Mount, fetching competitions (token {})", token.value());
            (new_state, Effect::FetchCompetitions(token))
        }

        Action::CompetitionsLoaded { token, result } => {
            let mut new_state = state;
            if !new_state.complete(Slot::Competitions, token) {
                debug!("SCREEN: Dropping stale competitions (token {})", token.value());
                return (new_state, Effect::None);
            }
            match result {
                Ok(competitions) => {
                    debug!("SCREEN: Loaded {} competitions", competitions.len());
                    new_state.competitions = competitions;
                }
                Err(e) => {
                    warn!("SCREEN: Competitions failed: {e}");
                    new_state.alerts.push(alerts::COMPETITIONS.to_string());
                }
            }
            (new_state, Effect::None)
        }

        Action::SelectCompetition(league_id) => {
            let mut new_state = state;
            let standings_token = new_state.issue_token(Slot::Standings);
            let teams_token = new_state.issue_token(Slot::Teams);
            debug!(
                "SCREEN: Competition {league_id} selected (standings token {}, teams token {})",
                standings_token.value(),
                teams_token.value()
            );
            new_state.selected_league = Some(league_id.clone());
            let effect = Effect::Batch(vec![
                Effect::FetchStandings {
                    token: standings_token,
                    league_id: league_id.clone(),
                },
                Effect::FetchTeams {
                    token: teams_token,
                    league_id,
                },
            ]);
            (new_state, effect)
        }

        Action::StandingsLoaded {
            token,
            league_id,
            result,
        } => {
            let mut new_state = state;
            if !new_state.complete(Slot::Standings, token) {
                debug!(
                    "SCREEN: Dropping stale standings for league {league_id} (token {})",
                    token.value()
                );
                return (new_state, Effect::None);
            }
            match result {
                Ok(standings) => {
                    debug!("SCREEN: Loaded {} standing rows for {league_id}", standings.len());
                    new_state.standings = standings;
                    new_state.standings_league = Some(league_id);
                }
                Err(e) => {
                    warn!("SCREEN: Standings for {league_id} failed: {e}");
                    new_state.alerts.push(alerts::STANDINGS.to_string());
                }
            }
            (new_state, Effect::None)
        }

        Action::TeamsLoaded {
            token,
            league_id,
            result,
        } => {
            let mut new_state = state;
            if !new_state.complete(Slot::Teams, token) {
                debug!(
                    "SCREEN: Dropping stale teams for league {league_id} (token {})",
                    token.value()
                );
                return (new_state, Effect::None);
            }
            match result {
                Ok(teams) => {
                    debug!("SCREEN: Loaded {} teams for {league_id}", teams.len());
                    new_state.teams = teams;
                    new_state.teams_league = Some(league_id);
                    match new_state.teams.first() {
                        Some(first) => {
                            let team_key = first.team_key.clone();
                            new_state.selected_badge = first.team_badge.clone();
                            select_team(&mut new_state, team_key);
                        }
                        None => {
                            new_state.selected_team = None;
                            new_state.players = Vec::new();
                        }
                    }
                }
                Err(e) => {
                    warn!("SCREEN: Teams for {league_id} failed: {e}");
                    new_state.alerts.push(alerts::TEAMS.to_string());
                }
            }
            (new_state, Effect::None)
        }

        Action::SelectTeam(team_key) => {
            let mut new_state = state;
            let Some(team) = new_state.teams.iter().find(|t| t.team_key == team_key) else {
                warn!("SCREEN: Ignoring selection of unknown team {team_key}");
                return (new_state, Effect::None);
            };
            new_state.selected_badge = team.team_badge.clone();
            select_team(&mut new_state, team_key);
            (new_state, Effect::None)
        }

        Action::SelectStanding(team_id) => {
            let mut new_state = state;
            match new_state.standings.iter().find(|row| row.team_id == team_id) {
                Some(row) => {
                    trace!("SCREEN: Standings row {team_id} selected");
                    new_state.selected_badge = row.team_badge.clone();
                }
                None => warn!("SCREEN: Ignoring selection of unknown standings row {team_id}"),
            }
            (new_state, Effect::None)
        }

        Action::SelectPlayer(player_key) => {
            let mut new_state = state;
            if new_state.players.iter().any(|p| p.player_key == player_key) {
                trace!("SCREEN: Player {player_key} selected");
                new_state.selected_badge = new_state
                    .selected_team()
                    .and_then(|team| team.team_badge.clone());
            } else {
                warn!("SCREEN: Ignoring selection of unknown player {player_key}");
            }
            (new_state, Effect::None)
        }

        Action::DismissAlert => {
            let mut new_state = state;
            if !new_state.alerts.is_empty() {
                new_state.alerts.remove(0);
            }
            (new_state, Effect::None)
        }
    }
}

/// Selects a team known to be in `state.teams` and re-derives its roster.
fn select_team(state: &mut ScreenState, team_key: String) {
    state.players = roster_for(&state.teams, &team_key);
    trace!("SCREEN: Derived {} players for team {team_key}", state.players.len());
    state.selected_team = Some(team_key);
}
