pub mod leaderboard;
pub mod outcome;
pub mod standings;
pub mod types;

pub use leaderboard::{build_leaderboard, LeaderboardEntry};
pub use outcome::classify;
pub use standings::{compute_standings, rank_rows};
pub use types::{MatchOutcome, Rank, StandingRow};
