use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown workout type {tag:?}; expected one of {valid:?}")]
    UnknownWorkoutType {
        tag: String,
        valid: Vec<&'static str>,
    },
    #[error("Workout type {tag} takes {expected} values, got {got}")]
    ArityMismatch {
        tag: &'static str,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("Division by zero: {quantity} must be non-zero")]
    DivisionByZero { quantity: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Dispatch(_)
            | AppError::Compute(_)
            | AppError::BadRequest(_)
            | AppError::Json(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Io(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
