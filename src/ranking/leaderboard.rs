use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{PlayerDirectory, PlayerId};

use super::standings::rank_rows;
use super::types::{Rank, StandingRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: Rank,
    pub player_id: PlayerId,
    /// `None` when the standings mention a player the directory lacks.
    pub display_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub point_diff: i64,
}

/// Merge standings with the full player directory.
///
/// Every directory player gets an entry, with zero wins, losses and
/// point diff when they have no decided match yet. Ranks are recomputed
/// over the merged set; since `(0, 0)` is the lowest possible key this
/// leaves the ranks of players already in `standings` unchanged.
pub fn build_leaderboard(
    standings: &[StandingRow],
    directory: &PlayerDirectory,
) -> Vec<LeaderboardEntry> {
    let mut rows = merge_with_directory(standings, directory);
    rank_rows(&mut rows);

    rows.into_iter()
        .map(|row| to_entry(row, directory))
        .collect()
}

fn merge_with_directory(
    standings: &[StandingRow],
    directory: &PlayerDirectory,
) -> Vec<StandingRow> {
    let mut rows = standings.to_vec();
    let ranked: HashSet<&str> = standings.iter().map(|r| r.player_id.as_str()).collect();

    let missing = directory
        .iter()
        .filter(|p| !ranked.contains(p.id.as_str()))
        .map(|p| StandingRow::unranked(p.id.clone()));
    rows.extend(missing);

    let unknown = rows
        .iter()
        .filter(|r| !directory.contains(&r.player_id))
        .count();
    if unknown > 0 {
        log::warn!("{} ranked players are missing from the player directory", unknown);
    }

    rows
}

fn to_entry(row: StandingRow, directory: &PlayerDirectory) -> LeaderboardEntry {
    let display_name = directory.display_name(&row.player_id).map(str::to_string);
    LeaderboardEntry {
        rank: row.rank,
        player_id: row.player_id,
        display_name,
        wins: row.wins,
        losses: row.losses,
        point_diff: row.point_diff,
    }
}
