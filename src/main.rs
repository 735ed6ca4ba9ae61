//! Entry point: load config, wire dependencies, and run the server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use voltshop_auth::auth::JwtSecret;
use voltshop_auth::config::{Config, StoreBackend};
use voltshop_auth::db;
use voltshop_auth::repositories::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
use voltshop_auth::{build_state, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn CredentialStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database_url).await?;
            db::run_migrations(&pool).await?;
            Arc::new(PgCredentialStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory credential store; accounts are not persisted");
            Arc::new(MemoryCredentialStore::new())
        }
    };
    let jwt_secret = JwtSecret::new(
        config.jwt_secret.clone(),
        config.jwt_issuer.clone(),
        config.jwt_expiry_secs,
    );

    let app = create_app(build_state(store, jwt_secret));

    tracing::info!(addr = %config.server_addr, backend = ?config.store_backend, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
