//! Auth HTTP handlers: register, login, me.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::{AuthUser, ValidatedJson};
use crate::models::UserProfile;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 3, max = 255))]
    pub username: String,
    #[validate(email, length(max = 320))]
    pub email: String,
    #[validate(length(min = 6, max = 32), custom(function = "validate_password_strength"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,
}

/// At least one ASCII letter and one ASCII digit.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength"))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegistrationRequest>,
) -> Result<StatusCode, AppError> {
    state.user_service().register_user(body).await?;
    Ok(StatusCode::OK)
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    match state.user_service().login_user(body).await? {
        Some(token) => Ok(Json(LoginResponse { token })),
        None => Err(AppError::InvalidCredentials),
    }
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = state.user_service().profile(user_id).await?;
    Ok(Json(UserProfile::from(user)))
}
