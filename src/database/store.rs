use anyhow::Result;
use chrono::NaiveDateTime;

use crate::domain::{Match, MatchFilter, Player, PlayerDirectory};

use super::connection::{get_connection, DbPool};
use super::{matches, players};

/// Where match records come from and where schedule/score edits go
pub trait MatchStore {
    fn fetch_matches(&self, filter: &MatchFilter) -> Result<Vec<Match>>;

    fn find_match(&self, id: &str) -> Result<Option<Match>>;

    /// `Ok(None)` when the match doesn't exist.
    fn update_schedule(
        &self,
        id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Option<Match>>;

    /// `Ok(None)` when the match doesn't exist.
    fn update_scores(
        &self,
        id: &str,
        player1_score: Option<i32>,
        player2_score: Option<i32>,
    ) -> Result<Option<Match>>;
}

pub trait PlayerSource {
    fn fetch_players(&self) -> Result<Vec<Player>>;

    /// Fresh directory built from the current player list.
    fn directory(&self) -> Result<PlayerDirectory> {
        Ok(PlayerDirectory::new(self.fetch_players()?))
    }
}

/// SQLite-backed store over a connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MatchStore for SqliteStore {
    fn fetch_matches(&self, filter: &MatchFilter) -> Result<Vec<Match>> {
        let conn = get_connection(&self.pool)?;
        matches::list(&conn, filter)
    }

    fn find_match(&self, id: &str) -> Result<Option<Match>> {
        let conn = get_connection(&self.pool)?;
        matches::find_by_id(&conn, id)
    }

    fn update_schedule(
        &self,
        id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Option<Match>> {
        let conn = get_connection(&self.pool)?;
        matches::update_schedule(&conn, id, start, end)
    }

    fn update_scores(
        &self,
        id: &str,
        player1_score: Option<i32>,
        player2_score: Option<i32>,
    ) -> Result<Option<Match>> {
        let conn = get_connection(&self.pool)?;
        matches::update_scores(&conn, id, player1_score, player2_score)
    }
}

impl PlayerSource for SqliteStore {
    fn fetch_players(&self) -> Result<Vec<Player>> {
        let conn = get_connection(&self.pool)?;
        players::list_all(&conn)
    }
}
