use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::config::FeedSettings;
use crate::domain::{Player, PlayerDirectory};

const TOKEN_BYTES: usize = 32;

/// Secret, stable token identifying a player's calendar feed link.
pub fn feed_token(player_id: &str, settings: &FeedSettings) -> String {
    let mut key = [0u8; TOKEN_BYTES];
    pbkdf2_hmac::<Sha256>(
        player_id.as_bytes(),
        settings.salt.as_bytes(),
        settings.iterations,
        &mut key,
    );
    hex::encode(key)
}

/// Player owning `token`, if exactly one player does.
pub fn resolve_token<'a>(
    directory: &'a PlayerDirectory,
    token: &str,
    settings: &FeedSettings,
) -> Option<&'a Player> {
    let token = token.trim().to_ascii_lowercase();
    let mut found = directory
        .iter()
        .filter(|p| feed_token(&p.id, settings) == token);

    match (found.next(), found.next()) {
        (Some(player), None) => Some(player),
        _ => None,
    }
}
