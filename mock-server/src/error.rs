use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Postgres code for a unique-constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";
/// Postgres code for invalid text representation (e.g. a null integer).
pub const INVALID_INPUT: &str = "22P02";

#[derive(Debug)]
pub enum ServerError {
    NotFound,
    DuplicateName(String),
    InvalidInput(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": "movie not found" }))).into_response()
            }
            ServerError::DuplicateName(name) => {
                tracing::debug!(%name, "duplicate movie name");
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "errorCode": UNIQUE_VIOLATION,
                        "message": format!("a movie named {name:?} already exists"),
                    })),
                )
                    .into_response()
            }
            ServerError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errorCode": INVALID_INPUT, "message": msg })),
            )
                .into_response(),
        }
    }
}
