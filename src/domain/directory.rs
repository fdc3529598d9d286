use std::collections::HashMap;

use super::models::Player;

/// Players indexed by id
///
/// Built from whatever the store returned for this request and passed to
/// the components that need name lookups.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<Player>) -> Self {
        let mut directory = Self::default();
        for player in players {
            directory.add(player);
        }
        directory
    }

    /// Later entries with the same id replace earlier ones.
    pub fn add(&mut self, player: Player) {
        match self.index.get(&player.id) {
            Some(&idx) => self.players[idx] = player,
            None => {
                self.index.insert(player.id.clone(), self.players.len());
                self.players.push(player);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.index.get(id).map(|&idx| &self.players[idx])
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.get(id).map(|p| p.display_name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
