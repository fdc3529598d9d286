use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::SchedulingError;

/// Errors surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    NotLoggedIn,
    NotFound(String),
    Forbidden(String),
    BadRequest(String),
    Internal(anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Self::NotLoggedIn => (StatusCode::UNAUTHORIZED, "You're not logged in.".to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(e) => {
                log::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error)
    }
}

impl From<SchedulingError> for ApiError {
    fn from(error: SchedulingError) -> Self {
        match error {
            SchedulingError::MatchNotFound(_) => Self::NotFound(error.to_string()),
            SchedulingError::NotParticipant { .. } => Self::Forbidden(error.to_string()),
            SchedulingError::OffGrid(_) | SchedulingError::ScoreOutOfRange { .. } => {
                Self::BadRequest(error.to_string())
            }
            SchedulingError::Store(e) => Self::Internal(e),
        }
    }
}
