//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default configuration values.

/// Default base URL of the apifootball v3 API
pub const DEFAULT_API_BASE_URL: &str = "https://apiv3.apifootball.com";

/// Country whose competitions are listed when nothing else is configured
pub const DEFAULT_COUNTRY_ID: &str = "6";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Name used for the config directory and default log file
pub const APP_DIR_NAME: &str = "football_terminal";

/// Default log file name
pub const LOG_FILE_NAME: &str = "football_terminal.log";

/// Default tracing directive when RUST_LOG is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "football_terminal=info";

/// apifootball action names
pub mod actions {
    pub const GET_LEAGUES: &str = "get_leagues";
    pub const GET_TEAMS: &str = "get_teams";
    pub const GET_TEAM_PLAYERS: &str = "get_team_players";
    pub const GET_STANDINGS: &str = "get_standings";
}

/// User-facing alert messages
pub mod alerts {
    pub const COMPETITIONS: &str = "Error fetching competitions data";
    pub const STANDINGS: &str = "Error fetching standings data";
    pub const TEAMS: &str = "Error fetching teams data";
}

/// UI timing and layout constants
pub mod ui {
    /// Event poll interval for the interactive loop (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Rows reserved for the header, badge line, list titles and footer
    pub const CHROME_ROWS: u16 = 7;

    /// Placeholder shown when a player has no photo reference
    pub const PLAYER_PLACEHOLDER: &str = "◉";
}

/// Environment variable names
pub mod env_vars {
    pub const API_KEY: &str = "FOOTBALL_API_KEY";
    pub const API_BASE_URL: &str = "FOOTBALL_API_BASE_URL";
    pub const COUNTRY_ID: &str = "FOOTBALL_COUNTRY_ID";
    pub const LOG_FILE: &str = "FOOTBALL_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_HTTP_TIMEOUT";
}
