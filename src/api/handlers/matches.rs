use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::models::{ScheduleRequest, ScoresRequest};
use crate::api::viewer::Viewer;
use crate::database::PlayerSource;
use crate::domain::Match;
use crate::services::{LeagueService, SchedulingService};
use crate::views::{self, CalendarEvent, MatchView};

use super::AppState;

pub async fn get_my_matches(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
) -> ApiResult<Json<Vec<MatchView>>> {
    let service = LeagueService::new(&state.store, &state.config);
    Ok(Json(service.my_matches(&viewer)?))
}

pub async fn get_unscheduled_matches(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
) -> ApiResult<Json<Vec<MatchView>>> {
    let service = LeagueService::new(&state.store, &state.config);
    Ok(Json(service.unscheduled_matches(&viewer)?))
}

pub async fn get_calendar_events(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
) -> ApiResult<Json<Vec<CalendarEvent>>> {
    let service = LeagueService::new(&state.store, &state.config);
    Ok(Json(service.calendar_events(&viewer)?))
}

pub async fn schedule_match(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
    Path(match_id): Path<String>,
    Json(request): Json<ScheduleRequest>,
) -> ApiResult<Json<MatchView>> {
    let service = SchedulingService::new(&state.store, &state.config.league);
    let updated = service.schedule(&match_id, &viewer, request.start)?;

    Ok(Json(viewer_view(&state, updated, &viewer)?))
}

pub async fn record_scores(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
    Path(match_id): Path<String>,
    Json(request): Json<ScoresRequest>,
) -> ApiResult<Json<MatchView>> {
    let service = SchedulingService::new(&state.store, &state.config.league);
    let updated = service.record_scores(
        &match_id,
        &viewer,
        request.player1_score,
        request.player2_score,
    )?;

    Ok(Json(viewer_view(&state, updated, &viewer)?))
}

fn viewer_view(state: &AppState, game: Match, viewer: &str) -> anyhow::Result<MatchView> {
    let directory = state.store.directory()?;
    let oriented = views::orient(&game, viewer).unwrap_or(game);
    let template = state.config.display.avatar_url_template.as_deref();
    Ok(MatchView::new(oriented, &directory).with_avatars(template))
}
