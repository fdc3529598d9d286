use axum::{extract::State, response::Json};
use chrono::Local;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::models::{LeaderboardItem, LeagueInfo, PlayerItem};
use crate::services::{LeagueService, SchedulingService};

use super::AppState;

pub async fn get_league(State(state): State<Arc<AppState>>) -> Json<LeagueInfo> {
    let service = LeagueService::new(&state.store, &state.config);
    let today = Local::now().date_naive();

    Json(LeagueInfo {
        season_end: state.config.league.season_end,
        days_left: service.days_left(today),
    })
}

pub async fn get_players(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PlayerItem>>> {
    let service = LeagueService::new(&state.store, &state.config);
    let template = state.config.display.avatar_url_template.as_deref();

    let players = service
        .players()?
        .into_iter()
        .map(|player| PlayerItem::new(player, template))
        .collect();

    Ok(Json(players))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LeaderboardItem>>> {
    let service = LeagueService::new(&state.store, &state.config);
    let template = state.config.display.avatar_url_template.as_deref();

    let board = service
        .leaderboard()?
        .into_iter()
        .map(|entry| LeaderboardItem::new(entry, template))
        .collect();

    Ok(Json(board))
}

pub async fn get_time_slots(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let service = SchedulingService::new(&state.store, &state.config.league);
    let slots = service
        .time_slots()
        .into_iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect();

    Json(slots)
}
