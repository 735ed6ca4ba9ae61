//! Application error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Username or email already registered")]
    DuplicateIdentifier,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::DuplicateIdentifier => StatusCode::CONFLICT,
            AppError::Auth(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Db(_) | AppError::Migrate(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            // The register/login contract answers these with a bare status.
            AppError::Validation(_) | AppError::DuplicateIdentifier | AppError::InvalidCredentials => {
                tracing::debug!(status = %status, error = %self, "request rejected");
                status.into_response()
            }
            AppError::Auth(msg) | AppError::Jwt(msg) => {
                (status, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Db(_) | AppError::Migrate(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (status, Json(json!({ "error": "internal error" }))).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
