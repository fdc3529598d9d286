use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use log::info;
use thiserror::Error;

use crate::config::LeagueSettings;
use crate::database::MatchStore;
use crate::domain::{Match, MatchId, PlayerId};

#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("Match with ID {0} not found.")]
    MatchNotFound(MatchId),

    #[error("Match {match_id} is not one of {player_id}'s matches")]
    NotParticipant { match_id: MatchId, player_id: PlayerId },

    #[error("{0} is not one of the bookable time slots")]
    OffGrid(NaiveDateTime),

    #[error("Score {score} is outside the allowed range 0..={max}")]
    ScoreOutOfRange { score: i32, max: i32 },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type SchedulingResult<T> = std::result::Result<T, SchedulingError>;

/// Every slot start between `day_start` and `day_end`, both inclusive.
pub fn time_slots(day_start: NaiveTime, day_end: NaiveTime, step_minutes: i64) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if step_minutes <= 0 {
        return slots;
    }

    let step = Duration::minutes(step_minutes);
    let mut current = day_start;
    while current <= day_end {
        slots.push(current);
        let (next, wrapped_secs) = current.overflowing_add_signed(step);
        if wrapped_secs != 0 {
            break;
        }
        current = next;
    }
    slots
}

/// Write side of the league: players booking and scoring their own matches
pub struct SchedulingService<'a, S> {
    store: &'a S,
    league: &'a LeagueSettings,
}

impl<'a, S: MatchStore> SchedulingService<'a, S> {
    pub fn new(store: &'a S, league: &'a LeagueSettings) -> Self {
        Self { store, league }
    }

    pub fn time_slots(&self) -> Vec<NaiveTime> {
        time_slots(self.league.day_start, self.league.day_end, self.league.slot_minutes)
    }

    /// Book (or move) a match into the slot starting at `start`.
    pub fn schedule(
        &self,
        match_id: &str,
        viewer: &str,
        start: NaiveDateTime,
    ) -> SchedulingResult<Match> {
        self.ensure_on_grid(start)?;
        self.load_own_match(match_id, viewer)?;

        let end = start + Duration::minutes(self.league.slot_minutes);
        let updated = self
            .store
            .update_schedule(match_id, start, end)?
            .ok_or_else(|| SchedulingError::MatchNotFound(match_id.to_string()))?;

        info!("{} scheduled match {} at {}", viewer, match_id, start);
        Ok(updated)
    }

    /// Record a result as seen by `viewer`: `my_score` is the viewer's own.
    /// `None` clears a score.
    pub fn record_scores(
        &self,
        match_id: &str,
        viewer: &str,
        my_score: Option<i32>,
        opponent_score: Option<i32>,
    ) -> SchedulingResult<Match> {
        self.ensure_score_in_range(my_score)?;
        self.ensure_score_in_range(opponent_score)?;
        let game = self.load_own_match(match_id, viewer)?;

        let (player1_score, player2_score) = if game.player1_id == viewer {
            (my_score, opponent_score)
        } else {
            (opponent_score, my_score)
        };

        let updated = self
            .store
            .update_scores(match_id, player1_score, player2_score)?
            .ok_or_else(|| SchedulingError::MatchNotFound(match_id.to_string()))?;

        info!(
            "{} recorded {:?}:{:?} for match {}",
            viewer, player1_score, player2_score, match_id
        );
        Ok(updated)
    }

    fn load_own_match(&self, match_id: &str, viewer: &str) -> SchedulingResult<Match> {
        let game = self
            .store
            .find_match(match_id)?
            .ok_or_else(|| SchedulingError::MatchNotFound(match_id.to_string()))?;

        if !game.involves(viewer) {
            return Err(SchedulingError::NotParticipant {
                match_id: match_id.to_string(),
                player_id: viewer.to_string(),
            });
        }
        Ok(game)
    }

    fn ensure_on_grid(&self, start: NaiveDateTime) -> SchedulingResult<()> {
        let time = start.time();
        let on_grid = time.nanosecond() == 0 && self.time_slots().contains(&time);
        if on_grid {
            Ok(())
        } else {
            Err(SchedulingError::OffGrid(start))
        }
    }

    fn ensure_score_in_range(&self, score: Option<i32>) -> SchedulingResult<()> {
        match score {
            Some(score) if !(0..=self.league.max_games).contains(&score) => {
                Err(SchedulingError::ScoreOutOfRange {
                    score,
                    max: self.league.max_games,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{self, seed_database, SeedData, SqliteStore};
    use crate::domain::Player;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn on(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 3).unwrap().and_time(t(h, m))
    }

    fn store() -> SqliteStore {
        let pool = database::create_memory_pool().unwrap();
        let mut conn = database::get_connection(&pool).unwrap();
        let player = |id: &str| Player {
            id: id.into(),
            display_name: id.to_uppercase(),
        };
        let game = |id: &str, p1: &str, p2: &str| Match {
            id: id.into(),
            player1_id: p1.into(),
            player2_id: p2.into(),
            player1_score: None,
            player2_score: None,
            start: None,
            end: None,
            status: None,
        };
        let seed = SeedData {
            players: vec![player("a"), player("b"), player("c")],
            matches: vec![game("m1", "a", "b"), game("m2", "c", "a"), game("m3", "b", "c")],
        };
        seed_database(&mut conn, &seed).unwrap();
        drop(conn);
        SqliteStore::new(pool)
    }

    #[test]
    fn test_time_slots_grid() {
        let slots = time_slots(t(9, 0), t(21, 0), 30);

        assert_eq!(slots.len(), 25);
        assert_eq!(slots[0], t(9, 0));
        assert_eq!(slots[1], t(9, 30));
        assert_eq!(*slots.last().unwrap(), t(21, 0));
    }

    #[test]
    fn test_time_slots_degenerate_inputs() {
        assert!(time_slots(t(9, 0), t(21, 0), 0).is_empty());
        assert!(time_slots(t(21, 0), t(9, 0), 30).is_empty());
        assert_eq!(time_slots(t(23, 0), t(23, 59), 30).len(), 2);
    }

    #[test]
    fn test_schedule_sets_start_and_end() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        let updated = service.schedule("m1", "b", on(18, 0)).unwrap();

        assert_eq!(updated.start, Some(on(18, 0)));
        assert_eq!(updated.end, Some(on(18, 30)));
    }

    #[test]
    fn test_reschedule_moves_match() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        service.schedule("m1", "a", on(10, 0)).unwrap();
        let moved = service.schedule("m1", "a", on(12, 30)).unwrap();

        assert_eq!(moved.start, Some(on(12, 30)));
        assert_eq!(moved.end, Some(on(13, 0)));
    }

    #[test]
    fn test_schedule_rejects_other_players_match() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        let err = service.schedule("m3", "a", on(18, 0)).unwrap_err();
        assert!(matches!(err, SchedulingError::NotParticipant { .. }));
    }

    #[test]
    fn test_schedule_rejects_off_grid_times() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        for start in [on(18, 15), on(8, 30), on(21, 30)] {
            let err = service.schedule("m1", "a", start).unwrap_err();
            assert!(matches!(err, SchedulingError::OffGrid(_)));
        }
    }

    #[test]
    fn test_missing_match_is_reported() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        let err = service.schedule("nope", "a", on(18, 0)).unwrap_err();
        assert!(matches!(err, SchedulingError::MatchNotFound(ref id) if id == "nope"));
        assert_eq!(err.to_string(), "Match with ID nope not found.");
    }

    #[test]
    fn test_scores_are_stored_from_viewer_side() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        // "a" is player2 in m2
        let updated = service.record_scores("m2", "a", Some(3), Some(1)).unwrap();
        assert_eq!(updated.player1_id, "c");
        assert_eq!(updated.player1_score, Some(1));
        assert_eq!(updated.player2_score, Some(3));

        let updated = service.record_scores("m1", "a", Some(2), Some(3)).unwrap();
        assert_eq!(updated.player1_score, Some(2));
        assert_eq!(updated.player2_score, Some(3));
    }

    #[test]
    fn test_scores_out_of_range() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        let err = service.record_scores("m1", "a", Some(4), Some(0)).unwrap_err();
        assert!(matches!(err, SchedulingError::ScoreOutOfRange { score: 4, max: 3 }));
        let err = service.record_scores("m1", "a", Some(1), Some(-1)).unwrap_err();
        assert!(matches!(err, SchedulingError::ScoreOutOfRange { score: -1, .. }));
    }

    #[test]
    fn test_partial_scores_are_allowed() {
        let store = store();
        let league = LeagueSettings::default();
        let service = SchedulingService::new(&store, &league);

        let updated = service.record_scores("m1", "a", Some(3), None).unwrap();
        assert_eq!(updated.player1_score, Some(3));
        assert_eq!(updated.player2_score, None);
    }
}
