use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Player;

const PLAYER_COLUMNS: &str = "id, display_name";

pub fn upsert_player(conn: &Connection, player: &Player) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (id, display_name) VALUES (?1, ?2) \
         ON CONFLICT(id) DO UPDATE SET display_name = excluded.display_name \
         RETURNING {PLAYER_COLUMNS}"
    );

    conn.query_row(&sql, params![player.id, player.display_name], parse_player_row)
        .with_context(|| format!("Failed to upsert player {}", player.id))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        display_name: row.get(1)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY display_name, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
