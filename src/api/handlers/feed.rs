use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::models::{FeedLink, FeedParams};
use crate::api::viewer::Viewer;
use crate::services::LeagueService;

use super::AppState;

const INVALID_LINK: &str = "link is invalid";

pub async fn get_feed_link(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
) -> Json<FeedLink> {
    let service = LeagueService::new(&state.store, &state.config);
    let token = service.feed_token(&viewer);
    let path = format!("/api/matches/ical?hash={}", token);

    Json(FeedLink { token, path })
}

pub async fn get_ical_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> ApiResult<Response> {
    let service = LeagueService::new(&state.store, &state.config);

    let response = match service.ical_for_token(&params.hash)? {
        Some(ics) => (
            [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
            ics,
        )
            .into_response(),
        None => {
            log::warn!("Rejected calendar feed request with unknown link");
            (StatusCode::NOT_FOUND, INVALID_LINK).into_response()
        }
    };

    Ok(response)
}
