use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-level errors. Everything else in the analyze pipeline degrades to
/// a canned result instead of erroring.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent no usable input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The model explicitly declined to analyze the image.
    #[error("Cannot analyze image: {message}")]
    CannotAnalyze {
        code: &'static str,
        message: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            Self::CannotAnalyze { code, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": code, "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
