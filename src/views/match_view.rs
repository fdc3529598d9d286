use serde::Serialize;

use crate::domain::{Match, PlayerDirectory};

use super::avatar::avatar_url_opt;

/// Match joined with both players' display names and avatars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    #[serde(flatten)]
    pub game: Match,
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    pub player1_avatar_url: Option<String>,
    pub player2_avatar_url: Option<String>,
}

impl MatchView {
    pub fn new(game: Match, directory: &PlayerDirectory) -> Self {
        let player1_name = lookup(directory, &game.player1_id);
        let player2_name = lookup(directory, &game.player2_id);
        Self {
            game,
            player1_name,
            player2_name,
            player1_avatar_url: None,
            player2_avatar_url: None,
        }
    }

    /// Fill in both avatar URLs from a `{id}` template; no template, no avatars.
    pub fn with_avatars(mut self, template: Option<&str>) -> Self {
        self.player1_avatar_url = avatar_url_opt(template, &self.game.player1_id);
        self.player2_avatar_url = avatar_url_opt(template, &self.game.player2_id);
        self
    }

    /// "Alice vs Bob", falling back to raw ids for unknown players.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.player1_label(), self.player2_label())
    }

    pub fn player1_label(&self) -> &str {
        self.player1_name.as_deref().unwrap_or(&self.game.player1_id)
    }

    pub fn player2_label(&self) -> &str {
        self.player2_name.as_deref().unwrap_or(&self.game.player2_id)
    }
}

fn lookup(directory: &PlayerDirectory, player_id: &str) -> Option<String> {
    directory.display_name(player_id).map(str::to_string)
}

/// Left join of matches against the directory. Unknown ids keep a `None`
/// name rather than dropping the match.
pub fn with_names(
    matches: Vec<Match>,
    directory: &PlayerDirectory,
    avatar_template: Option<&str>,
) -> Vec<MatchView> {
    matches
        .into_iter()
        .map(|m| MatchView::new(m, directory).with_avatars(avatar_template))
        .collect()
}
