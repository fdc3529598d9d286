use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Match, MatchFilter};

const MATCH_COLUMNS: &str =
    "id, player1_id, player2_id, player1_score, player2_score, start_at, end_at, status";

pub fn insert_match(conn: &Connection, game: &Match) -> Result<Match> {
    let sql = format!(
        "INSERT INTO matches (id, player1_id, player2_id, player1_score, player2_score, start_at, end_at, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            game.id,
            game.player1_id,
            game.player2_id,
            game.player1_score,
            game.player2_score,
            game.start,
            game.end,
            game.status
        ],
        parse_match_row,
    )
    .with_context(|| format!("Failed to insert match {}", game.id))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        player1_id: row.get(1)?,
        player2_id: row.get(2)?,
        player1_score: row.get(3)?,
        player2_score: row.get(4)?,
        start: row.get(5)?,
        end: row.get(6)?,
        status: row.get(7)?,
    })
}

pub fn list(conn: &Connection, filter: &MatchFilter) -> Result<Vec<Match>> {
    match &filter.player_id {
        Some(player_id) => list_for_player(conn, player_id),
        None => list_all(conn),
    }
}

pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_for_player(conn: &Connection, player_id: &str) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE player1_id = ?1 OR player2_id = ?1 ORDER BY id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list matches for player {player_id}"))?;

    Ok(rows)
}

pub fn find_by_id(conn: &Connection, id: &str) -> Result<Option<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

/// Returns `None` when no match has this id.
pub fn update_schedule(
    conn: &Connection,
    id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Option<Match>> {
    let sql = format!(
        "UPDATE matches SET start_at = ?2, end_at = ?3 WHERE id = ?1 RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(&sql, params![id, start, end], parse_match_row)
        .optional()
        .with_context(|| format!("Failed to update schedule of match {id}"))
}

/// Returns `None` when no match has this id.
pub fn update_scores(
    conn: &Connection,
    id: &str,
    player1_score: Option<i32>,
    player2_score: Option<i32>,
) -> Result<Option<Match>> {
    let sql = format!(
        "UPDATE matches SET player1_score = ?2, player2_score = ?3 WHERE id = ?1 RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(&sql, params![id, player1_score, player2_score], parse_match_row)
        .optional()
        .with_context(|| format!("Failed to update scores of match {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::reset_database;
    use chrono::NaiveDate;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        conn
    }

    fn game(id: &str, p1: &str, p2: &str) -> Match {
        Match {
            id: id.to_string(),
            player1_id: p1.to_string(),
            player2_id: p2.to_string(),
            player1_score: None,
            player2_score: None,
            start: None,
            end: None,
            status: None,
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_insert_round_trips_all_fields() {
        let conn = test_conn();
        let full = Match {
            player1_score: Some(3),
            player2_score: Some(1),
            start: Some(at(18, 0)),
            end: Some(at(18, 30)),
            status: Some("played".into()),
            ..game("m1", "a", "b")
        };

        insert_match(&conn, &full).unwrap();

        assert_eq!(find_by_id(&conn, "m1").unwrap(), Some(full));
    }

    #[test]
    fn test_null_columns_stay_null() {
        let conn = test_conn();
        insert_match(&conn, &game("m1", "a", "b")).unwrap();

        let loaded = find_by_id(&conn, "m1").unwrap().unwrap();
        assert_eq!(loaded.player1_score, None);
        assert_eq!(loaded.start, None);
        assert_eq!(loaded.status, None);
    }

    #[test]
    fn test_self_play_is_rejected() {
        let conn = test_conn();
        assert!(insert_match(&conn, &game("m1", "a", "a")).is_err());
    }

    #[test]
    fn test_filter_by_player() {
        let conn = test_conn();
        insert_match(&conn, &game("m1", "a", "b")).unwrap();
        insert_match(&conn, &game("m2", "c", "a")).unwrap();
        insert_match(&conn, &game("m3", "b", "c")).unwrap();

        let mine = list(&conn, &MatchFilter::for_player("a")).unwrap();
        let ids: Vec<_> = mine.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);

        assert_eq!(list(&conn, &MatchFilter::all()).unwrap().len(), 3);
    }

    #[test]
    fn test_update_schedule() {
        let conn = test_conn();
        insert_match(&conn, &game("m1", "a", "b")).unwrap();

        let updated = update_schedule(&conn, "m1", at(9, 0), at(9, 30)).unwrap().unwrap();
        assert_eq!(updated.start, Some(at(9, 0)));
        assert_eq!(updated.end, Some(at(9, 30)));
    }

    #[test]
    fn test_update_scores_can_clear() {
        let conn = test_conn();
        insert_match(&conn, &game("m1", "a", "b")).unwrap();

        update_scores(&conn, "m1", Some(3), Some(2)).unwrap();
        let cleared = update_scores(&conn, "m1", None, None).unwrap().unwrap();
        assert_eq!(cleared.player1_score, None);
        assert_eq!(cleared.player2_score, None);
    }

    #[test]
    fn test_updates_report_missing_match() {
        let conn = test_conn();
        assert!(update_schedule(&conn, "nope", at(9, 0), at(9, 30)).unwrap().is_none());
        assert!(update_scores(&conn, "nope", Some(1), Some(0)).unwrap().is_none());
    }
}
