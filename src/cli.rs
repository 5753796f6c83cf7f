use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print once and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_update(args) || args.list_config
}

/// True when any of --config, --set-log-file or --clear-log-file is given.
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_key.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Football competitions, standings, teams and rosters in your terminal
///
/// Lists the competitions of the configured country from apifootball.
/// Selecting a competition loads its standings and teams; the first team's
/// roster is shown automatically.
///
/// In interactive mode (default):
/// - Use Tab/Shift+Tab or ←/→ to switch between lists
/// - Use ↑/↓ to move and Enter to select
/// - Press Esc to dismiss an error message
/// - Press 'q' to quit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the lists once and exit. Combine with --league and --team to
    /// include standings, teams and a roster.
    #[arg(short, long)]
    pub once: bool,

    /// Competition to select in --once mode, by league id.
    #[arg(long, requires = "once", help_heading = "Display Options")]
    pub league: Option<String>,

    /// Team whose roster to show in --once mode, by team key.
    /// Defaults to the first team of the competition.
    #[arg(long, requires = "league", help_heading = "Display Options")]
    pub team: Option<String>,

    /// Disable clickable badge links in the output.
    /// Useful for terminals that don't support OSC 8 hyperlinks.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub disable_links: bool,

    /// Update the API key in config. Will prompt for a new key if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which draws without the alternate screen.
    /// With --once, logs are also printed to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let args = Args::try_parse_from(["football_terminal"]).unwrap();
        assert!(!is_noninteractive_mode(&args));
        assert!(!args.disable_links);
    }

    #[test]
    fn test_once_with_selection() {
        let args = Args::try_parse_from([
            "football_terminal",
            "-o",
            "--league",
            "152",
            "--team",
            "141",
            "-p",
        ])
        .unwrap();
        assert!(is_noninteractive_mode(&args));
        assert_eq!(args.league.as_deref(), Some("152"));
        assert_eq!(args.team.as_deref(), Some("141"));
        assert!(args.disable_links);
    }

    #[test]
    fn test_league_requires_once() {
        assert!(Args::try_parse_from(["football_terminal", "--league", "152"]).is_err());
        assert!(
            Args::try_parse_from(["football_terminal", "-o", "--team", "141"]).is_err()
        );
    }

    #[test]
    fn test_config_without_value_prompts() {
        let args = Args::try_parse_from(["football_terminal", "--config"]).unwrap();
        assert_eq!(args.new_api_key.as_deref(), Some(""));
        assert!(is_config_update(&args));

        let args = Args::try_parse_from(["football_terminal", "--config", "abc123"]).unwrap();
        assert_eq!(args.new_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_list_config_is_noninteractive() {
        let args = Args::try_parse_from(["football_terminal", "-l"]).unwrap();
        assert!(is_noninteractive_mode(&args));
        assert!(!is_config_update(&args));
    }
}
