use std::cmp::Ordering;

use crate::domain::Match;

use super::types::MatchOutcome;

pub fn classify(game: &Match) -> MatchOutcome<'_> {
    let (Some(first), Some(second)) = (game.player1_score, game.player2_score) else {
        return MatchOutcome::Undecided;
    };

    match first.cmp(&second) {
        Ordering::Greater => decided(&game.player1_id, &game.player2_id, first, second),
        Ordering::Less => decided(&game.player2_id, &game.player1_id, second, first),
        Ordering::Equal => MatchOutcome::Tie,
    }
}

fn decided<'a>(
    winner: &'a str,
    loser: &'a str,
    winning_score: i32,
    losing_score: i32,
) -> MatchOutcome<'a> {
    MatchOutcome::Decided {
        winner,
        loser,
        margin: i64::from(winning_score) - i64::from(losing_score),
    }
}
