use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::api::error::ApiError;
use crate::api::handlers::AppState;
use crate::domain::PlayerId;

/// Logged-in player, taken from the player cookie
///
/// There is no real authentication: whoever sends the cookie is that player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer(pub PlayerId);

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for Viewer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = state.config.server.player_cookie.as_str();

        parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| find_cookie(header, cookie_name))
            .map(Viewer)
            .ok_or(ApiError::NotLoggedIn)
    }
}

fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
        .map(|value| urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned()))
}
