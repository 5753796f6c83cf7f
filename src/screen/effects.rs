use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use super::action::{Action, Effect};
use super::state::RequestToken;
use crate::data_fetcher::FootballDataProvider;

/// Effect handler for data fetching operations.
///
/// Each method returns a future that resolves to the matching `*Loaded`
/// action. Errors are flattened to their display text.
pub struct DataEffects {
    client: Arc<dyn FootballDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn FootballDataProvider>) -> Self {
        Self { client }
    }

    pub fn fetch_competitions(&self, token: RequestToken) -> BoxFuture<'static, Action> {
        let client = self.client.clone();
        Box::pin(async move {
            let result = client.fetch_competitions().await;
            Action::CompetitionsLoaded {
                token,
                result: result.map_err(|e| e.to_string()),
            }
        })
    }

    pub fn fetch_standings(
        &self,
        token: RequestToken,
        league_id: String,
    ) -> BoxFuture<'static, Action> {
        let client = self.client.clone();
        Box::pin(async move {
            let result = client.fetch_standings(&league_id).await;
            Action::StandingsLoaded {
                token,
                league_id,
                result: result.map_err(|e| e.to_string()),
            }
        })
    }

    pub fn fetch_teams(&self, token: RequestToken, league_id: String) -> BoxFuture<'static, Action> {
        let client = self.client.clone();
        Box::pin(async move {
            let result = client.fetch_teams(&league_id).await;
            Action::TeamsLoaded {
                token,
                league_id,
                result: result.map_err(|e| e.to_string()),
            }
        })
    }

    /// Starts a single fetch; `None` for effects that fetch nothing.
    pub fn start(&self, fetch: Effect) -> Option<BoxFuture<'static, Action>> {
        match fetch {
            Effect::FetchCompetitions(token) => {
                debug!("EFFECT: Fetching competitions (token {})", token.value());
                Some(self.fetch_competitions(token))
            }
            Effect::FetchStandings { token, league_id } => {
                debug!("EFFECT: Fetching standings for {league_id} (token {})", token.value());
                Some(self.fetch_standings(token, league_id))
            }
            Effect::FetchTeams { token, league_id } => {
                debug!("EFFECT: Fetching teams for {league_id} (token {})", token.value());
                Some(self.fetch_teams(token, league_id))
            }
            Effect::None | Effect::Batch(_) => None,
        }
    }

    /// Turns a reducer effect into the futures that carry it out.
    pub fn execute(&self, effect: Effect) -> Vec<BoxFuture<'static, Action>> {
        effect
            .into_fetches()
            .into_iter()
            .filter_map(|fetch| self.start(fetch))
            .collect()
    }
}
