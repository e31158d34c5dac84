use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{ IntoResponse, Json, Response };
use serde_json::json;
use thiserror::Error;

/// Errors returned to HTTP clients. Review content itself never produces one.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {message}")]
    InvalidBody {
        status: StatusCode,
        message: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting request");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
