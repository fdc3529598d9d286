use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::domain::{Match, Player};

use super::{matches, players, setup};

/// Initial league contents: the roster and the round-robin pairings
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl SeedData {
    /// Reject data the schema would choke on halfway through the import.
    pub fn validate(&self) -> Result<()> {
        let mut player_ids = HashSet::new();
        for player in &self.players {
            if !player_ids.insert(player.id.as_str()) {
                bail!("Duplicate player id in seed data: {}", player.id);
            }
        }

        let mut match_ids = HashSet::new();
        for game in &self.matches {
            if !match_ids.insert(game.id.as_str()) {
                bail!("Duplicate match id in seed data: {}", game.id);
            }
            if game.player1_id == game.player2_id {
                bail!("Match {} pairs {} with themselves", game.id, game.player1_id);
            }
            for side in [&game.player1_id, &game.player2_id] {
                if !player_ids.contains(side.as_str()) {
                    warn!("Match {} references unknown player {}", game.id, side);
                }
            }
        }

        Ok(())
    }
}

pub fn load_seed<P: AsRef<Path>>(players_path: P, matches_path: P) -> Result<SeedData> {
    let seed = SeedData {
        players: load_json(players_path.as_ref())?,
        matches: load_json(matches_path.as_ref())?,
    };
    info!(
        "Loaded {} players and {} matches from seed files",
        seed.players.len(),
        seed.matches.len()
    );
    Ok(seed)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Recreate the schema and fill it with `seed`, all or nothing.
pub fn seed_database(conn: &mut Connection, seed: &SeedData) -> Result<()> {
    seed.validate()?;

    let tx = conn.transaction().context("Failed to open seed transaction")?;
    setup::reset_database(&tx)?;

    for player in &seed.players {
        players::upsert_player(&tx, player)?;
    }
    for game in &seed.matches {
        matches::insert_match(&tx, game)?;
    }

    tx.commit().context("Failed to commit seed data")?;
    info!(
        "Seeded {} players and {} matches",
        seed.players.len(),
        seed.matches.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> Player {
        Player {
            id: id.to_string(),
            display_name: id.to_uppercase(),
        }
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

    fn seed() -> SeedData {
        SeedData {
            players: vec![player("a"), player("b"), player("c")],
            matches: vec![game("m1", "a", "b"), game("m2", "a", "c"), game("m3", "b", "c")],
        }
    }

    #[test]
    fn test_seed_database() {
        let mut conn = Connection::open_in_memory().unwrap();
        seed_database(&mut conn, &seed()).unwrap();

        assert_eq!(players::list_all(&conn).unwrap().len(), 3);
        assert_eq!(matches::list_all(&conn).unwrap().len(), 3);
    }

    #[test]
    fn test_seed_replaces_previous_contents() {
        let mut conn = Connection::open_in_memory().unwrap();
        seed_database(&mut conn, &seed()).unwrap();

        let smaller = SeedData {
            players: vec![player("x"), player("y")],
            matches: vec![game("m9", "x", "y")],
        };
        seed_database(&mut conn, &smaller).unwrap();

        assert_eq!(players::list_all(&conn).unwrap().len(), 2);
        assert_eq!(matches::list_all(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_self_play_is_rejected() {
        let mut data = seed();
        data.matches.push(game("m4", "a", "a"));

        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("themselves"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut data = seed();
        data.matches.push(game("m1", "b", "c"));
        assert!(data.validate().is_err());

        let mut data = seed();
        data.players.push(player("a"));
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_unknown_players_are_allowed() {
        let mut data = seed();
        data.matches.push(game("m4", "a", "ghost"));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_load_seed_files() {
        let dir = std::env::temp_dir().join("league_scheduler_seed_test");
        fs::create_dir_all(&dir).unwrap();
        let players_path = dir.join("players.json");
        let matches_path = dir.join("matches.json");
        fs::write(
            &players_path,
            r#"[{"id": "a", "displayName": "Alice"}, {"id": "b", "displayName": "Bob"}]"#,
        )
        .unwrap();
        fs::write(
            &matches_path,
            r#"[{"id": "m1", "player1Id": "a", "player2Id": "b", "player1Score": 3, "start": "2025-09-01T18:00:00"}]"#,
        )
        .unwrap();

        let data = load_seed(&players_path, &matches_path).unwrap();

        assert_eq!(data.players[1].display_name, "Bob");
        assert_eq!(data.matches[0].player1_score, Some(3));
        assert_eq!(data.matches[0].player2_score, None);
        assert!(data.matches[0].start.is_some());

        fs::remove_dir_all(&dir).unwrap();
    }
}
