use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::domain::{Match, PlayerId};

use super::outcome::classify;
use super::types::{MatchOutcome, Rank, StandingRow};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    losses: u32,
    point_diff: i64,
}

/// Standings for every player who won or lost at least one decided match.
///
/// Rows come back in display order and carry dense ranks over
/// `(wins, point_diff)`, both descending. Ties and undecided matches
/// contribute nothing.
pub fn compute_standings(matches: &[Match]) -> Vec<StandingRow> {
    let tallies = tally_decided_matches(matches);
    let mut rows = build_rows(tallies);
    rank_rows(&mut rows);
    rows
}

fn tally_decided_matches(matches: &[Match]) -> BTreeMap<PlayerId, Tally> {
    let mut tallies: BTreeMap<PlayerId, Tally> = BTreeMap::new();

    for game in matches {
        if let MatchOutcome::Decided { winner, loser, margin } = classify(game) {
            record_win(&mut tallies, winner, margin);
            record_loss(&mut tallies, loser);
        }
    }

    tallies
}

fn record_win(tallies: &mut BTreeMap<PlayerId, Tally>, winner: &str, margin: i64) {
    let tally = tallies.entry(winner.to_string()).or_default();
    tally.wins += 1;
    tally.point_diff += margin;
}

fn record_loss(tallies: &mut BTreeMap<PlayerId, Tally>, loser: &str) {
    tallies.entry(loser.to_string()).or_default().losses += 1;
}

fn build_rows(tallies: BTreeMap<PlayerId, Tally>) -> Vec<StandingRow> {
    tallies
        .into_iter()
        .map(|(player_id, tally)| StandingRow {
            player_id,
            wins: tally.wins,
            losses: tally.losses,
            point_diff: tally.point_diff,
            rank: 0,
        })
        .collect()
}

/// Sort rows into display order and assign dense ranks.
///
/// The display sort uses the rank key itself, so rank numbers are always
/// non-decreasing down the list. Player id breaks remaining ties so the
/// output is deterministic.
pub fn rank_rows(rows: &mut [StandingRow]) {
    sort_for_display(rows);
    assign_dense_ranks(rows);
}

fn sort_for_display(rows: &mut [StandingRow]) {
    rows.sort_by(|a, b| {
        Reverse(a.rank_key())
            .cmp(&Reverse(b.rank_key()))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
}

fn assign_dense_ranks(rows: &mut [StandingRow]) {
    let mut rank: Rank = 0;
    let mut previous_key = None;

    for row in rows.iter_mut() {
        let key = row.rank_key();
        if previous_key != Some(key) {
            rank += 1;
            previous_key = Some(key);
        }
        row.rank = rank;
    }
}
