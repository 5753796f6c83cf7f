//! # football_terminal
//!
//! Browse football competitions, standings, teams and rosters from the
//! apifootball v3 API in a terminal.
//!
//! The crate is split into a data layer that wraps the four apifootball
//! requests, a screen layer that sequences them in response to selections,
//! and a terminal UI on top.
//!
//! ## Example
//!
//! ```no_run
//! use football_terminal::{ApiClient, Config};
//!
//! # async fn example() -> Result<(), football_terminal::AppError> {
//! let config = Config::load().await?;
//! let client = ApiClient::new(&config)?;
//!
//! for competition in client.fetch_competitions().await? {
//!     println!("{} {}", competition.league_id, competition.league_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod screen;
pub mod testing_utils;
pub mod ui;

pub use config::Config;
pub use data_fetcher::models::{Competition, Player, StandingRow, Team, roster_for};
pub use data_fetcher::{ApiClient, FootballDataProvider};
pub use error::AppError;
pub use screen::{Action, Runtime, ScreenState};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
