use crossterm::style::Color;

// Palette for the football screen, all 256-colour ANSI values
pub fn header_bg() -> Color {
    Color::AnsiValue(22)
} // Pitch green
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn title_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn focused_title_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
}
pub fn dim_fg() -> Color {
    Color::AnsiValue(245)
} // Grey
pub fn highlight_bg() -> Color {
    Color::AnsiValue(24)
} // Deep blue
pub fn badge_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn alert_bg() -> Color {
    Color::AnsiValue(160)
} // Red

/// Extracts the 256-colour index, falling back for named colours.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
