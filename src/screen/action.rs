use super::state::RequestToken;
use crate::data_fetcher::models::{Competition, StandingRow, Team};

/// Events consumed by the screen reducer.
///
/// Load results carry the error as a display string so actions stay `Clone`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Screen shown for the first time
    Mount,
    CompetitionsLoaded {
        token: RequestToken,
        result: Result<Vec<Competition>, String>,
    },
    /// A competition row was selected
    SelectCompetition(String),
    StandingsLoaded {
        token: RequestToken,
        league_id: String,
        result: Result<Vec<StandingRow>, String>,
    },
    TeamsLoaded {
        token: RequestToken,
        league_id: String,
        result: Result<Vec<Team>, String>,
    },
    /// A team row was selected, by team key
    SelectTeam(String),
    /// A standings row was selected, by team id
    SelectStanding(String),
    /// A player row was selected, by player key
    SelectPlayer(String),
    DismissAlert,
}

impl Action {
    /// True for actions produced by a finished fetch.
    pub fn is_load_result(&self) -> bool {
        matches!(
            self,
            Action::CompetitionsLoaded { .. }
                | Action::StandingsLoaded { .. }
                | Action::TeamsLoaded { .. }
        )
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchCompetitions(RequestToken),
    FetchStandings {
        token: RequestToken,
        league_id: String,
    },
    FetchTeams {
        token: RequestToken,
        league_id: String,
    },
    Batch(Vec<Effect>),
}

impl Effect {
    /// Flattens nested batches into the list of fetches to start.
    pub fn into_fetches(self) -> Vec<Effect> {
        match self {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::into_fetches).collect(),
            fetch => vec![fetch],
        }
    }

    /// The failed `*Loaded` action a single fetch resolves to when it cannot finish.
    pub fn failure(&self, message: &str) -> Option<Action> {
        match self {
            Effect::FetchCompetitions(token) => Some(Action::CompetitionsLoaded {
                token: *token,
                result: Err(message.to_string()),
            }),
            Effect::FetchStandings { token, league_id } => Some(Action::StandingsLoaded {
                token: *token,
                league_id: league_id.clone(),
                result: Err(message.to_string()),
            }),
            Effect::FetchTeams { token, league_id } => Some(Action::TeamsLoaded {
                token: *token,
                league_id: league_id.clone(),
                result: Err(message.to_string()),
            }),
            Effect::None | Effect::Batch(_) => None,
        }
    }
}
