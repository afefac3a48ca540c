use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed identifier: {0}")]
    MalformedId(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Parse a path segment into a numeric id; a non-numeric segment is a
/// client error, never silently defaulted.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::MalformedId(raw.to_string()))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::MalformedId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Service(ServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Service(ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Service(_) => {
                error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
