use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{
    api::{json_error::JsonError, responses::ErrorResponse},
    database::models::job,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidJob(#[from] JsonError),
    #[error("Existing job found: {}", .0.name)]
    DuplicateJob(Box<job::Model>),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidJob(err) => err.into_response(),
            Self::DuplicateJob(existing) => {
                let body = ErrorResponse {
                    error: format!("Existing job found: {}", existing.name),
                    job: Some((*existing).into()),
                };
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            Self::Database(err) => {
                error!("Database error while handling request: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
