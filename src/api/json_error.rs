use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

/// Why a request body could not be turned into a valid value.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("Error parsing JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("Invalid job: {0}")]
    ValidationError(ValidationErrors),
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::InvalidJson(_) => serde_json::json!({ "error": self.to_string() }),
            Self::ValidationError(errors) => serde_json::json!({
                "error": "Invalid job",
                "fields": errors,
            }),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
