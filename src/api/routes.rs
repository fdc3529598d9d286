use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    feed::{get_feed_link, get_ical_feed},
    league::{get_league, get_players, get_standings, get_time_slots},
    matches::{
        get_calendar_events, get_my_matches, get_unscheduled_matches, record_scores,
        schedule_match,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/league", get(get_league))
        .route("/api/players", get(get_players))
        .route("/api/standings", get(get_standings))
        .route("/api/time-slots", get(get_time_slots))
        .route("/api/me/matches", get(get_my_matches))
        .route("/api/me/matches/unscheduled", get(get_unscheduled_matches))
        .route("/api/me/feed-link", get(get_feed_link))
        .route("/api/calendar/events", get(get_calendar_events))
        .route("/api/matches/ical", get(get_ical_feed))
        .route("/api/matches/:id/schedule", put(schedule_match))
        .route("/api/matches/:id/scores", put(record_scores))
        .with_state(state)
}
