use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type MatchId = String;

/// League participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
}

/// Round-robin pairing between two players
///
/// Scores are the number of games each side took. A missing score on
/// either side means the match has not been played yet. `start`/`end`
/// are league-local wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    #[serde(default)]
    pub player1_score: Option<i32>,
    #[serde(default)]
    pub player2_score: Option<i32>,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Match {
    pub fn involves(&self, player_id: &str) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }

    pub fn is_scheduled(&self) -> bool {
        self.start.is_some()
    }

    /// Same match seen from the other side: ids and scores trade places.
    pub fn swapped(&self) -> Self {
        Self {
            id: self.id.clone(),
            player1_id: self.player2_id.clone(),
            player2_id: self.player1_id.clone(),
            player1_score: self.player2_score,
            player2_score: self.player1_score,
            start: self.start,
            end: self.end,
            status: self.status.clone(),
        }
    }
}

/// Which matches to fetch from the store
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub player_id: Option<PlayerId>,
}

impl MatchFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_player(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: Some(player_id.into()),
        }
    }
}
