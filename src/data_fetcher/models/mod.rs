pub mod common;
pub mod competition;
pub mod players;
pub mod standings;
pub mod team;

pub use common::UpstreamError;
pub use competition::Competition;
pub use players::Player;
pub use standings::StandingRow;
pub use team::{Team, roster_for};
