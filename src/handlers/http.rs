//! Shared HTTP state and the health probe.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::{JwtSecret, UserService};

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health: liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "voltshop-auth" })),
    )
}
