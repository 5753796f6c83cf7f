//! Text helpers for list rows: width-aware truncation, padding and
//! OSC-8 hyperlinks for image references.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::ui::PLAYER_PLACEHOLDER;
use crate::data_fetcher::models::{Competition, Player, StandingRow, Team};

const ELLIPSIS: char = '…';

/// Terminal column width of `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Drops control characters so API text cannot emit terminal escapes.
pub fn strip_controls(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Cuts `text` to at most `max_width` columns, ending in an ellipsis when cut.
/// Control characters are removed first.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let text = strip_controls(text);
    if display_width(&text) <= max_width {
        return text;
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Truncates or right-pads `text` to exactly `width` columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let pad = width.saturating_sub(display_width(&out));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Wraps `text` in an OSC-8 hyperlink when links are enabled.
pub fn hyperlink(url: &str, text: &str, links_enabled: bool) -> String {
    if links_enabled {
        format!("\x1b]8;;{url}\x07{text}\x1b]8;;\x07")
    } else {
        text.to_string()
    }
}

/// Label for an image reference; linked when possible, raw URL in plain mode.
pub fn image_label(url: Option<&str>, label: &str, links_enabled: bool) -> String {
    match url.map(strip_controls) {
        Some(url) if links_enabled => hyperlink(&url, &strip_controls(label), true),
        Some(url) => url,
        None => "-".to_string(),
    }
}

/// Fits `text` into `width` columns and appends a short image label after it.
///
/// Only the label is linked, so escapes never go through width arithmetic.
/// Without links the label is plain text; the full URL is left to plain output.
pub fn row_with_image(
    text: &str,
    image: Option<&str>,
    label: &str,
    width: usize,
    links_enabled: bool,
) -> String {
    let label_width = display_width(label) + 1;
    match image {
        Some(url) if width > label_width => format!(
            "{} {}",
            fit_to_width(text, width - label_width),
            hyperlink(&strip_controls(url), label, links_enabled)
        ),
        _ => fit_to_width(text, width),
    }
}

pub fn competition_row(competition: &Competition) -> String {
    let name = strip_controls(&competition.league_name);
    match &competition.country_name {
        Some(country) => format!("{name} ({})", strip_controls(country)),
        None => name,
    }
}

/// `" 1 Arsenal          10  +12  27"` with the name column `name_width` wide.
pub fn standing_row(row: &StandingRow, name_width: usize) -> String {
    format!(
        "{:>2} {} {:>3} {:>+4} {:>3}",
        row.overall_league_position,
        fit_to_width(&row.team_name, name_width),
        row.played,
        row.goal_difference(),
        row.points
    )
}

pub fn team_row(team: &Team) -> String {
    let count = team.players.len();
    let noun = if count == 1 { "player" } else { "players" };
    format!("{} ({count} {noun})", strip_controls(&team.team_name))
}

/// Jersey, name and position; the placeholder glyph marks a missing photo.
pub fn player_row(player: &Player) -> String {
    let photo = if player.player_image.is_some() {
        " "
    } else {
        PLAYER_PLACEHOLDER
    };
    let mut line = format!(
        "{photo} {:>4} {}",
        strip_controls(&player.jersey()),
        strip_controls(&player.player_name)
    );
    if let Some(position) = &player.player_type {
        line.push_str(&format!(" · {}", strip_controls(position)));
    }
    line
}
