pub mod api;
pub mod models;
pub mod provider;

pub use api::ApiClient;
pub use models::{Competition, Player, StandingRow, Team};
pub use provider::FootballDataProvider;
