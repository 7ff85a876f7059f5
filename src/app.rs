use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::config::Config;

/// Shared state handed to every request handler.
#[derive(Clone, Debug)]
pub struct App {
    pub config: Config,
    pub db: DatabaseConnection,
}

impl App {
    /// Checks that the database still answers.
    pub async fn check_readiness(&self) -> Result<(), ReadinessError> {
        self.db.ping().await?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("Database connection error")]
    DatabaseError(#[from] sea_orm::DbErr),
}

impl IntoResponse for ReadinessError {
    fn into_response(self) -> Response {
        (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
    }
}
