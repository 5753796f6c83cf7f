//! Screen rendering into a single ANSI buffer.
//!
//! The whole frame is built in a string and written in one go to avoid
//! flicker. Layout is a 2x2 grid: competitions and standings on top, teams
//! and players below.

use std::fmt::Write as _;

use super::colors::*;
use super::formatting::{
    competition_row, fit_to_width, image_label, player_row, row_with_image, standing_row,
    strip_controls, team_row, truncate_to_width,
};
use super::view::{Pane, ViewState};
use crate::constants::ui::{CHROME_ROWS, CONTENT_MARGIN};
use crate::screen::ScreenState;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const COLUMN_GAP: usize = 2;
const HELP_TEXT: &str = "Tab/←→ switch list  ↑↓ move  Enter select  Esc dismiss  q quit";

/// Columns the standings row uses besides the team name.
const STANDING_FIXED_WIDTH: usize = 16;

/// Columns taken by the `" badge"` suffix on standings rows.
const BADGE_LABEL_WIDTH: usize = 6;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u16,
    pub height: u16,
    pub links_enabled: bool,
    /// Local time of the last applied fetch, shown in the header
    pub updated_at: Option<String>,
    pub spinner_frame: usize,
}

/// Rows available to each list below its title.
pub fn pane_rows(height: u16) -> usize {
    (height.saturating_sub(CHROME_ROWS) / 2) as usize
}

fn column_width(width: u16) -> usize {
    let inner = (width as usize).saturating_sub(CONTENT_MARGIN * 2);
    inner.saturating_sub(COLUMN_GAP) / 2
}

/// Lines of one list, already fitted to the column width.
fn pane_lines(pane: Pane, state: &ScreenState, width: usize, links_enabled: bool) -> Vec<String> {
    let marked = |is_current: bool, text: String, image: Option<&str>, label: &str| {
        let marker = if is_current { "▸ " } else { "  " };
        row_with_image(&format!("{marker}{text}"), image, label, width, links_enabled)
    };

    match pane {
        Pane::Competitions => state
            .competitions
            .iter()
            .map(|c| {
                let current = state.selected_league.as_deref() == Some(c.league_id.as_str());
                marked(current, competition_row(c), c.league_logo.as_deref(), "logo")
            })
            .collect(),
        Pane::Standings => {
            let name_width = width
                .saturating_sub(STANDING_FIXED_WIDTH + 2 + BADGE_LABEL_WIDTH)
                .max(4);
            state
                .standings
                .iter()
                .map(|row| {
                    marked(
                        false,
                        standing_row(row, name_width),
                        row.team_badge.as_deref(),
                        "badge",
                    )
                })
                .collect()
        }
        Pane::Teams => state
            .teams
            .iter()
            .map(|team| {
                let current = state.selected_team.as_deref() == Some(team.team_key.as_str());
                marked(current, team_row(team), team.team_badge.as_deref(), "badge")
            })
            .collect(),
        Pane::Players => state
            .players
            .iter()
            .map(|player| fit_to_width(&format!("  {}", player_row(player)), width))
            .collect(),
    }
}

fn empty_message(pane: Pane, state: &ScreenState) -> &'static str {
    let loading = pane.slot().is_some_and(|slot| state.is_loading(slot))
        || (pane == Pane::Players && state.is_loading(crate::screen::Slot::Teams));
    if loading {
        return "Loading…";
    }
    let league_selected = state.selected_league.is_some();
    match pane {
        Pane::Competitions => "No competitions",
        Pane::Standings if league_selected => "No standings",
        Pane::Teams if league_selected => "No teams",
        Pane::Standings | Pane::Teams => "Select a competition",
        Pane::Players if state.selected_team.is_some() => "No players",
        Pane::Players => "Select a team",
    }
}

struct PaneArea {
    row: usize,
    col: usize,
    width: usize,
    rows: usize,
}

fn draw_pane(
    buffer: &mut String,
    pane: Pane,
    area: &PaneArea,
    state: &ScreenState,
    view: &ViewState,
    options: &RenderOptions,
) {
    let focused = view.focus == pane;
    let title_color = if focused {
        get_ansi_code(focused_title_fg(), 226)
    } else {
        get_ansi_code(title_fg(), 46)
    };
    let spinner = match pane.slot() {
        Some(slot) if state.is_loading(slot) => {
            SPINNER_FRAMES[options.spinner_frame % SPINNER_FRAMES.len()]
        }
        _ => "",
    };
    let _ = write!(
        buffer,
        "\x1b[{};{}H\x1b[1m\x1b[38;5;{}m{} {}\x1b[0m",
        area.row,
        area.col,
        title_color,
        pane.title(),
        spinner
    );

    let lines = pane_lines(pane, state, area.width, options.links_enabled);
    if lines.is_empty() {
        let _ = write!(
            buffer,
            "\x1b[{};{}H\x1b[38;5;{}m  {}\x1b[0m",
            area.row + 1,
            area.col,
            get_ansi_code(dim_fg(), 245),
            truncate_to_width(empty_message(pane, state), area.width.saturating_sub(2))
        );
        return;
    }

    let cursor = view.cursor(pane);
    let text_code = get_ansi_code(text_fg(), 231);
    let highlight_code = get_ansi_code(highlight_bg(), 24);
    for (i, line) in lines
        .iter()
        .enumerate()
        .skip(cursor.offset)
        .take(area.rows)
    {
        let row = area.row + 1 + (i - cursor.offset);
        if focused && i == cursor.selected {
            let _ = write!(
                buffer,
                "\x1b[{row};{}H\x1b[48;5;{highlight_code}m\x1b[38;5;{text_code}m{line}\x1b[0m",
                area.col
            );
        } else {
            let _ = write!(
                buffer,
                "\x1b[{row};{}H\x1b[38;5;{text_code}m{line}\x1b[0m",
                area.col
            );
        }
    }
}

/// Builds the full interactive frame.
pub fn render_screen(state: &ScreenState, view: &ViewState, options: &RenderOptions) -> String {
    let width = options.width as usize;
    let col_width = column_width(options.width);
    let rows = pane_rows(options.height);
    let mut buffer = String::with_capacity(width * options.height as usize * 2);

    buffer.push_str("\x1b[H");
    buffer.push_str("\x1b[0J");

    // Header
    let updated = options
        .updated_at
        .as_deref()
        .map(|t| format!("Updated {t} "))
        .unwrap_or_default();
    let title_width = width.saturating_sub(updated.chars().count());
    let _ = write!(
        buffer,
        "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{}{}\x1b[0m",
        get_ansi_code(header_bg(), 22),
        get_ansi_code(header_fg(), 231),
        fit_to_width(" FOOTBALL", title_width),
        updated
    );

    // Competition and badge line
    let league = state
        .selected_competition()
        .map(|c| c.league_name.clone())
        .unwrap_or_else(|| "No competition selected".to_string());
    let badge = image_label(state.selected_badge.as_deref(), "badge", options.links_enabled);
    let _ = write!(
        buffer,
        "\x1b[2;{}H\x1b[38;5;{}m{}\x1b[0m  \x1b[38;5;{}m{}\x1b[0m",
        CONTENT_MARGIN + 1,
        get_ansi_code(title_fg(), 46),
        truncate_to_width(&league, col_width),
        get_ansi_code(badge_fg(), 51),
        badge
    );

    let left = CONTENT_MARGIN + 1;
    let right = left + col_width + COLUMN_GAP;
    let top = 4;
    let bottom = top + rows + 1;
    for (pane, row, col) in [
        (Pane::Competitions, top, left),
        (Pane::Standings, top, right),
        (Pane::Teams, bottom, left),
        (Pane::Players, bottom, right),
    ] {
        let area = PaneArea {
            row,
            col,
            width: col_width,
            rows,
        };
        draw_pane(&mut buffer, pane, &area, state, view, options);
    }

    // Footer
    let footer_row = options.height.max(1);
    match state.current_alert() {
        Some(alert) => {
            let extra = if state.alerts.len() > 1 {
                format!(" (+{})", state.alerts.len() - 1)
            } else {
                String::new()
            };
            let _ = write!(
                buffer,
                "\x1b[{footer_row};1H\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m",
                get_ansi_code(alert_bg(), 160),
                get_ansi_code(header_fg(), 231),
                fit_to_width(&format!(" ! {alert}{extra}  [Esc]"), width)
            );
        }
        None => {
            let _ = write!(
                buffer,
                "\x1b[{footer_row};{}H\x1b[38;5;{}m{}\x1b[0m",
                CONTENT_MARGIN + 1,
                get_ansi_code(dim_fg(), 245),
                truncate_to_width(HELP_TEXT, width.saturating_sub(CONTENT_MARGIN * 2))
            );
        }
    }

    buffer
}

fn plain_heading(buffer: &mut String, title: &str) {
    let _ = writeln!(
        buffer,
        "\x1b[1m\x1b[38;5;{}m{title}\x1b[0m",
        get_ansi_code(title_fg(), 46)
    );
}

/// Image reference for plain output: the URL itself, linked when enabled.
fn plain_image(url: Option<&str>, links_enabled: bool) -> String {
    image_label(url, url.unwrap_or_default(), links_enabled)
}

/// Renders every list one after another, for `--once` output.
pub fn render_plain(state: &ScreenState, links_enabled: bool) -> String {
    const PLAIN_WIDTH: usize = 76;
    let mut buffer = String::new();

    plain_heading(&mut buffer, "COMPETITIONS");
    if state.competitions.is_empty() {
        buffer.push_str("  No competitions\n");
    }
    for competition in &state.competitions {
        let _ = writeln!(
            buffer,
            "  {:>6}  {}  {}",
            strip_controls(&competition.league_id),
            competition_row(competition),
            plain_image(competition.league_logo.as_deref(), links_enabled)
        );
    }

    if let Some(league_id) = &state.selected_league {
        let name = strip_controls(
            state
                .selected_competition()
                .map(|c| c.league_name.as_str())
                .unwrap_or(league_id),
        );

        buffer.push('\n');
        plain_heading(&mut buffer, &format!("STANDINGS · {name}"));
        if state.standings.is_empty() {
            buffer.push_str("  No standings\n");
        }
        let name_width = PLAIN_WIDTH - STANDING_FIXED_WIDTH;
        for row in &state.standings {
            let _ = writeln!(
                buffer,
                "  {}  {}",
                standing_row(row, name_width).trim_end(),
                plain_image(row.team_badge.as_deref(), links_enabled)
            );
        }

        buffer.push('\n');
        plain_heading(&mut buffer, "TEAMS");
        if state.teams.is_empty() {
            buffer.push_str("  No teams\n");
        }
        for team in &state.teams {
            let marker = if state.selected_team.as_deref() == Some(team.team_key.as_str()) {
                "▸"
            } else {
                " "
            };
            let _ = writeln!(
                buffer,
                "{marker} {:>6}  {}  {}",
                strip_controls(&team.team_key),
                team_row(team),
                plain_image(team.team_badge.as_deref(), links_enabled)
            );
        }

        if let Some(team) = state.selected_team() {
            buffer.push('\n');
            plain_heading(
                &mut buffer,
                &format!("PLAYERS · {}", strip_controls(&team.team_name)),
            );
            if state.players.is_empty() {
                buffer.push_str("  No players\n");
            }
            for player in &state.players {
                let _ = writeln!(buffer, "  {}", player_row(player));
            }
        }

        if let Some(badge) = &state.selected_badge {
            let _ = writeln!(buffer, "\nBadge: {}", plain_image(Some(badge), links_enabled));
        }
    }

    for alert in &state.alerts {
        let _ = writeln!(
            buffer,
            "\n\x1b[48;5;{}m ! {alert} \x1b[0m",
            get_ansi_code(alert_bg(), 160)
        );
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::alerts;
    use crate::testing_utils::TestDataBuilder;

    fn options() -> RenderOptions {
        RenderOptions {
            width: 100,
            height: 30,
            links_enabled: true,
            updated_at: Some("12:34".to_string()),
            spinner_frame: 0,
        }
    }

    fn league_state() -> ScreenState {
        let mut state = ScreenState::new();
        state.competitions = vec![
            TestDataBuilder::competition("6", "Championship"),
            TestDataBuilder::competition("152", "Premier League"),
        ];
        state.selected_league = Some("152".to_string());
        state.standings = vec![TestDataBuilder::standing("10", "Alpha", 1)];
        state.standings_league = Some("152".to_string());
        state.teams = vec![TestDataBuilder::team_with_roster("10", "Alpha", 2)];
        state.teams_league = Some("152".to_string());
        state.players = state.teams[0].players.clone();
        state.selected_team = Some("10".to_string());
        state.selected_badge = state.teams[0].team_badge.clone();
        state
    }

    #[test]
    fn test_pane_rows() {
        assert_eq!(pane_rows(30), 11);
        assert_eq!(pane_rows(5), 0);
    }

    #[test]
    fn test_render_screen_contains_all_lists() {
        let state = league_state();
        let frame = render_screen(&state, &ViewState::new(), &options());

        assert!(frame.starts_with("\x1b[H\x1b[0J"));
        assert!(frame.contains("Updated 12:34"));
        assert!(frame.contains("Premier League"));
        assert!(frame.contains("▸ Premier League (England)"));
        assert!(frame.contains("Alpha (2 players)"));
        assert!(frame.contains("Alpha Player 2"));
        assert!(frame.contains("\x1b]8;;https://badges.test/10.png\x07badge"));
        assert!(frame.contains("q quit"));
    }

    #[test]
    fn test_render_screen_shows_alert_instead_of_help() {
        let mut state = ScreenState::new();
        state.alerts = vec![alerts::STANDINGS.to_string(), alerts::TEAMS.to_string()];
        let frame = render_screen(&state, &ViewState::new(), &options());

        assert!(frame.contains("! Error fetching standings data (+1)"));
        assert!(!frame.contains("q quit"));
    }

    #[test]
    fn test_render_screen_empty_messages() {
        let frame = render_screen(&ScreenState::new(), &ViewState::new(), &options());
        assert!(frame.contains("No competitions"));
        assert!(frame.contains("Select a team"));
    }

    #[test]
    fn test_render_screen_rows_link_images() {
        let frame = render_screen(&league_state(), &ViewState::new(), &options());
        assert!(frame.contains("\x1b]8;;https://logos.test/152.png\x07logo\x1b]8;;\x07"));
        assert!(frame.contains("\x1b]8;;https://logos.test/6.png\x07logo"));
    }

    #[test]
    fn test_failed_lists_for_selected_league_say_so() {
        let mut state = ScreenState::new();
        state.competitions = vec![TestDataBuilder::competition("152", "Premier League")];
        state.selected_league = Some("152".to_string());
        state.alerts = vec![alerts::STANDINGS.to_string(), alerts::TEAMS.to_string()];

        let frame = render_screen(&state, &ViewState::new(), &options());
        assert!(frame.contains("No standings"));
        assert!(frame.contains("No teams"));
        assert!(!frame.contains("Select a competition"));
    }

    #[test]
    fn test_render_plain_lists_image_urls() {
        let text = render_plain(&league_state(), false);
        assert!(text.contains("Premier League (England)  https://logos.test/152.png"));
        assert!(text.contains("https://logos.test/6.png"));
        assert!(text.contains("Alpha (2 players)  https://badges.test/10.png"));
    }

    #[test]
    fn test_render_plain_strips_control_characters() {
        let mut state = league_state();
        state.competitions[1].league_name = "Premier\x1b]0;owned\x07 League".to_string();
        state.teams[0].team_name = "Alpha\x1b[2J".to_string();
        state.competitions[0].league_logo = Some("https://logos.test/\x1b[5m6.png".to_string());

        let text = render_plain(&state, false);
        assert!(!text.contains("\x07"));
        assert!(!text.contains("\x1b[2J"));
        assert!(!text.contains("\x1b]0;"));
        assert!(text.contains("STANDINGS · Premier]0;owned League"));
        assert!(text.contains("https://logos.test/[5m6.png"));
    }

    #[test]
    fn test_render_plain_without_links() {
        let state = league_state();
        let text = render_plain(&state, false);

        assert!(text.contains("STANDINGS · Premier League"));
        assert!(text.contains("PLAYERS · Alpha"));
        assert!(text.contains("Badge: https://badges.test/10.png"));
        assert!(!text.contains("\x1b]8;;"));
    }

    #[test]
    fn test_render_plain_competitions_only() {
        let mut state = ScreenState::new();
        state.competitions = vec![TestDataBuilder::competition("6", "Championship")];
        let text = render_plain(&state, true);

        assert!(text.contains("Championship (England)"));
        assert!(!text.contains("STANDINGS"));
    }
}
