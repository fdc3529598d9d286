use serde::Serialize;

use crate::domain::PlayerId;

pub type Rank = u32;

/// One player's line in the standings, recomputed from the match table
/// on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub wins: u32,
    pub losses: u32,
    /// Sum of winning margins. Losses never subtract.
    pub point_diff: i64,
    pub rank: Rank,
}

impl StandingRow {
    pub fn unranked(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            wins: 0,
            losses: 0,
            point_diff: 0,
            rank: 0,
        }
    }

    /// Key the dense rank is computed over; greater is better.
    pub fn rank_key(&self) -> (u32, i64) {
        (self.wins, self.point_diff)
    }
}

/// How a single match counts towards the standings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// At least one score is missing.
    Undecided,
    /// Both scores present and equal.
    Tie,
    Decided {
        winner: &'a str,
        loser: &'a str,
        margin: i64,
    },
}
