//! Registration and login service for the VoltShop store API.
//!
//! Accepts registration and login requests, validates them, and delegates to
//! a pluggable credential store and a JWT issuer.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use std::sync::Arc;

use axum::routing::{get, post};
use handlers::http;
use repositories::CredentialStore;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Wire a store and token issuer into the shared handler state.
pub fn build_state(store: Arc<dyn CredentialStore>, jwt_secret: auth::JwtSecret) -> AppState {
    AppState {
        user_service: auth::UserService::new(store, jwt_secret.clone()),
        jwt_secret,
    }
}

/// Build the API router (health, auth). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/auth", auth_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
