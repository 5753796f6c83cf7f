use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_api_key;
use crate::data_fetcher::FootballDataProvider;
use crate::error::AppError;
use crate::screen::{Action, Runtime, ScreenState};
use crate::ui::render_plain;
use std::path::Path;
use std::sync::Arc;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the saved file when there is one, so updating the log path on
/// a fresh install does not trigger the API key prompt.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_key) = &args.new_api_key {
        config.api_key = if new_key.trim().is_empty() {
            prompt_for_api_key().await?
        } else {
            new_key.trim().to_string()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if config.api_key.is_empty() {
        config.api_key = prompt_for_api_key().await?;
    }

    config.validate()?;
    config.save().await?;
    tracing::info!("Config saved to {config_path}");
    println!("Config updated successfully!");

    Ok(())
}

/// Drives the screen the way a user would for --once output.
///
/// Loads competitions, then optionally selects `league` and `team`, waiting
/// for every fetch to land before moving on.
pub async fn collect_once_state(
    provider: Arc<dyn FootballDataProvider>,
    league: Option<&str>,
    team: Option<&str>,
) -> ScreenState {
    let mut runtime = Runtime::new(provider);

    runtime.dispatch(Action::Mount);
    runtime.run_until_idle().await;

    if let Some(league_id) = league {
        if !runtime
            .state()
            .competitions
            .iter()
            .any(|c| c.league_id == league_id)
        {
            tracing::warn!("League {league_id} is not among the listed competitions");
        }
        runtime.dispatch(Action::SelectCompetition(league_id.to_string()));
        runtime.run_until_idle().await;

        if let Some(team_key) = team {
            runtime.dispatch(Action::SelectTeam(team_key.to_string()));
            if runtime.state().selected_team.as_deref() != Some(team_key) {
                tracing::warn!("Team {team_key} not found in league {league_id}");
            }
        }
    }

    runtime.state().clone()
}

/// Handles the --once command (quick view mode).
///
/// Fetch failures do not abort: they show up as alerts in the printed output.
pub async fn handle_once_command(
    args: &Args,
    provider: Arc<dyn FootballDataProvider>,
) -> Result<(), AppError> {
    let state = collect_once_state(provider, args.league.as_deref(), args.team.as_deref()).await;
    print!("{}", render_plain(&state, !args.disable_links));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::alerts;
    use crate::testing_utils::{FakeProvider, TestDataBuilder};

    fn provider() -> FakeProvider {
        FakeProvider::new()
            .with_competitions(vec![TestDataBuilder::competition("152", "Premier League")])
            .with_league(
                "152",
                vec![TestDataBuilder::standing("141", "Arsenal", 1)],
                vec![
                    TestDataBuilder::team_with_roster("141", "Arsenal", 2),
                    TestDataBuilder::team_with_roster("80", "Chelsea", 3),
                ],
            )
    }

    #[tokio::test]
    async fn test_collect_competitions_only() {
        let state = collect_once_state(Arc::new(provider()), None, None).await;
        assert_eq!(state.competitions.len(), 1);
        assert!(state.teams.is_empty());
        assert_eq!(state.selected_league, None);
    }

    #[tokio::test]
    async fn test_collect_with_league_and_team() {
        let state = collect_once_state(Arc::new(provider()), Some("152"), Some("80")).await;
        assert_eq!(state.standings.len(), 1);
        assert_eq!(state.selected_team.as_deref(), Some("80"));
        assert_eq!(state.players.len(), 3);
    }

    #[tokio::test]
    async fn test_collect_unknown_team_keeps_first_team() {
        let state = collect_once_state(Arc::new(provider()), Some("152"), Some("999")).await;
        assert_eq!(state.selected_team.as_deref(), Some("141"));
        assert_eq!(state.players.len(), 2);
    }

    #[tokio::test]
    async fn test_collect_reports_failures_as_alerts() {
        let provider = provider().fail_teams("152");
        let state = collect_once_state(Arc::new(provider), Some("152"), None).await;
        assert_eq!(state.standings.len(), 1);
        assert!(state.teams.is_empty());
        assert_eq!(state.current_alert(), Some(alerts::TEAMS));
    }
}
