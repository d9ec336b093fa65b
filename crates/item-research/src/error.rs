use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::research::ResearchError;

const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Research(#[from] ResearchError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Research(ResearchError::MissingInput) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_) | AppError::Research(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let message = if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
