use crate::domain::Match;

/// Matches the player takes part in, on either side.
pub fn involving(matches: &[Match], player_id: &str) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| m.involves(player_id))
        .cloned()
        .collect()
}

/// The player's matches with the player always in the `player1` slot.
///
/// When the player is listed second, ids and scores are swapped. The match
/// id, timestamps and status carry over untouched.
pub fn from_perspective(matches: &[Match], me: &str) -> Vec<Match> {
    matches
        .iter()
        .filter_map(|m| orient(m, me))
        .collect()
}

/// A single match turned towards `me`, `None` if `me` doesn't play in it.
pub fn orient(game: &Match, me: &str) -> Option<Match> {
    if game.player1_id == me {
        Some(game.clone())
    } else if game.player2_id == me {
        Some(game.swapped())
    } else {
        None
    }
}

/// Matches that have no start time yet.
pub fn unscheduled(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| !m.is_scheduled())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture() -> Vec<Match> {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        vec![
            Match {
                id: "m1".into(),
                player1_id: "me".into(),
                player2_id: "bob".into(),
                player1_score: Some(3),
                player2_score: Some(1),
                start: Some(start),
                end: Some(start + chrono::Duration::minutes(30)),
                status: Some("played".into()),
            },
            Match {
                id: "m2".into(),
                player1_id: "carol".into(),
                player2_id: "me".into(),
                player1_score: Some(2),
                player2_score: None,
                start: Some(start),
                end: None,
                status: None,
            },
            Match {
                id: "m3".into(),
                player1_id: "bob".into(),
                player2_id: "carol".into(),
                player1_score: None,
                player2_score: None,
                start: None,
                end: None,
                status: None,
            },
        ]
    }

    #[test]
    fn test_involving_filters_other_matches() {
        let mine = involving(&fixture(), "me");
        let ids: Vec<_> = mine.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_perspective_puts_me_first() {
        let mine = from_perspective(&fixture(), "me");

        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|m| m.player1_id == "me"));
    }

    #[test]
    fn test_perspective_swap_preserves_fields() {
        let original = fixture();
        let mine = from_perspective(&original, "me");
        let swapped = mine.iter().find(|m| m.id == "m2").unwrap();

        assert_eq!(swapped.player2_id, "carol");
        assert_eq!(swapped.player1_score, None);
        assert_eq!(swapped.player2_score, Some(2));
        assert_eq!(swapped.start, original[1].start);
        assert_eq!(swapped.end, None);
        assert_eq!(swapped.status, None);
    }

    #[test]
    fn test_perspective_leaves_first_slot_matches_alone() {
        let original = fixture();
        let mine = from_perspective(&original, "me");
        assert_eq!(mine[0], original[0]);
    }

    #[test]
    fn test_unscheduled() {
        let open = unscheduled(&fixture());
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, "m3");
    }

    #[test]
    fn test_unknown_player_has_no_matches() {
        assert!(from_perspective(&fixture(), "nobody").is_empty());
    }
}
