//! Cursor and focus state for the four lists.
//!
//! This is purely presentational: it never changes the screen state itself,
//! it only turns key presses into screen actions.

use crate::screen::{Action, ScreenState, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Competitions,
    Standings,
    Teams,
    Players,
}

impl Pane {
    pub const ALL: [Pane; 4] = [
        Pane::Competitions,
        Pane::Standings,
        Pane::Teams,
        Pane::Players,
    ];

    fn index(self) -> usize {
        match self {
            Pane::Competitions => 0,
            Pane::Standings => 1,
            Pane::Teams => 2,
            Pane::Players => 3,
        }
    }

    pub fn next(self) -> Pane {
        Pane::ALL[(self.index() + 1) % Pane::ALL.len()]
    }

    pub fn prev(self) -> Pane {
        Pane::ALL[(self.index() + Pane::ALL.len() - 1) % Pane::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Competitions => "COMPETITIONS",
            Pane::Standings => "STANDINGS",
            Pane::Teams => "TEAMS",
            Pane::Players => "PLAYERS",
        }
    }

    /// Fetch slot backing this pane; players are derived, not fetched.
    pub fn slot(self) -> Option<Slot> {
        match self {
            Pane::Competitions => Some(Slot::Competitions),
            Pane::Standings => Some(Slot::Standings),
            Pane::Teams => Some(Slot::Teams),
            Pane::Players => None,
        }
    }

    pub fn len(self, state: &ScreenState) -> usize {
        match self {
            Pane::Competitions => state.competitions.len(),
            Pane::Standings => state.standings.len(),
            Pane::Teams => state.teams.len(),
            Pane::Players => state.players.len(),
        }
    }
}

/// Highlighted row and first visible row of one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    fn clamp(&mut self, len: usize) {
        if len == 0 {
            *self = ListCursor::default();
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn scroll_into_view(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_rows {
            self.offset = self.selected + 1 - visible_rows;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub focus: Pane,
    cursors: [ListCursor; 4],
    /// Lists whose contents the cursors were last positioned against
    seen_standings: Option<String>,
    seen_teams: Option<String>,
    seen_team: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            focus: Pane::Competitions,
            cursors: [ListCursor::default(); 4],
            seen_standings: None,
            seen_teams: None,
            seen_team: None,
        }
    }

    pub fn cursor(&self, pane: Pane) -> ListCursor {
        self.cursors[pane.index()]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn move_up(&mut self, state: &ScreenState, visible_rows: usize) {
        let cursor = &mut self.cursors[self.focus.index()];
        cursor.selected = cursor.selected.saturating_sub(1);
        cursor.clamp(self.focus.len(state));
        cursor.scroll_into_view(visible_rows);
    }

    pub fn move_down(&mut self, state: &ScreenState, visible_rows: usize) {
        let len = self.focus.len(state);
        let cursor = &mut self.cursors[self.focus.index()];
        if cursor.selected + 1 < len {
            cursor.selected += 1;
        }
        cursor.clamp(len);
        cursor.scroll_into_view(visible_rows);
    }

    /// Re-anchors cursors after the screen state changed underneath them.
    ///
    /// A list replaced for another league or team starts again at the top;
    /// the team cursor follows the team the screen auto-selected.
    pub fn sync(&mut self, state: &ScreenState, visible_rows: usize) {
        if state.standings_league != self.seen_standings {
            self.cursors[Pane::Standings.index()] = ListCursor::default();
            self.seen_standings = state.standings_league.clone();
        }
        if state.teams_league != self.seen_teams {
            self.cursors[Pane::Teams.index()] = ListCursor::default();
            self.seen_teams = state.teams_league.clone();
        }
        if state.selected_team != self.seen_team {
            self.cursors[Pane::Players.index()] = ListCursor::default();
            if let Some(key) = &state.selected_team
                && let Some(pos) = state.teams.iter().position(|t| &t.team_key == key)
            {
                self.cursors[Pane::Teams.index()].selected = pos;
            }
            self.seen_team = state.selected_team.clone();
        }

        for pane in Pane::ALL {
            let cursor = &mut self.cursors[pane.index()];
            cursor.clamp(pane.len(state));
            cursor.scroll_into_view(visible_rows);
        }
    }

    /// Action for selecting the highlighted row of the focused list.
    pub fn activate(&self, state: &ScreenState) -> Option<Action> {
        let index = self.cursor(self.focus).selected;
        match self.focus {
            Pane::Competitions => state
                .competitions
                .get(index)
                .map(|c| Action::SelectCompetition(c.league_id.clone())),
            Pane::Standings => state
                .standings
                .get(index)
                .map(|row| Action::SelectStanding(row.team_id.clone())),
            Pane::Teams => state
                .teams
                .get(index)
                .map(|team| Action::SelectTeam(team.team_key.clone())),
            Pane::Players => state
                .players
                .get(index)
                .map(|player| Action::SelectPlayer(player.player_key.clone())),
        }
    }
}
