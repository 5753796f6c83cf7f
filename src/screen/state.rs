use crate::data_fetcher::models::{Competition, Player, StandingRow, Team};

/// Tag attached to each fetch; strictly increasing within one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// State slots that are filled by a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Competitions,
    Standings,
    Teams,
}

/// Latest token issued per slot; `None` when nothing is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRequests {
    competitions: Option<RequestToken>,
    standings: Option<RequestToken>,
    teams: Option<RequestToken>,
}

impl PendingRequests {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<RequestToken> {
        match slot {
            Slot::Competitions => &mut self.competitions,
            Slot::Standings => &mut self.standings,
            Slot::Teams => &mut self.teams,
        }
    }

    fn get(&self, slot: Slot) -> Option<RequestToken> {
        match slot {
            Slot::Competitions => self.competitions,
            Slot::Standings => self.standings,
            Slot::Teams => self.teams,
        }
    }
}

/// Everything the screen shows, as one snapshot.
///
/// Invariant: `players` is the roster of the team `selected_team` names, and
/// that team is part of `teams`. Both are empty/`None` otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub competitions: Vec<Competition>,
    pub standings: Vec<StandingRow>,
    /// League the held standings belong to
    pub standings_league: Option<String>,
    pub teams: Vec<Team>,
    /// League the held teams belong to
    pub teams_league: Option<String>,
    pub players: Vec<Player>,
    /// Last competition the user selected
    pub selected_league: Option<String>,
    pub selected_team: Option<String>,
    /// Image reference currently shown as focal; last write wins
    pub selected_badge: Option<String>,
    /// User-facing alerts, oldest first
    pub alerts: Vec<String>,
    pending: PendingRequests,
    last_token: u64,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for `slot`, superseding any request in flight.
    pub(super) fn issue_token(&mut self, slot: Slot) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        *self.pending.slot_mut(slot) = Some(token);
        token
    }

    /// Clears the slot if `token` is its latest request. Returns false for stale tokens.
    pub(super) fn complete(&mut self, slot: Slot, token: RequestToken) -> bool {
        let pending = self.pending.slot_mut(slot);
        if *pending == Some(token) {
            *pending = None;
            true
        } else {
            false
        }
    }

    /// True while a request for `slot` is in flight.
    pub fn is_loading(&self, slot: Slot) -> bool {
        self.pending.get(slot).is_some()
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.first().map(String::as_str)
    }

    /// The team whose roster is currently shown.
    pub fn selected_team(&self) -> Option<&Team> {
        let key = self.selected_team.as_deref()?;
        self.teams.iter().find(|team| team.team_key == key)
    }

    pub fn selected_competition(&self) -> Option<&Competition> {
        let league_id = self.selected_league.as_deref()?;
        self.competitions.iter().find(|c| c.league_id == league_id)
    }
}
