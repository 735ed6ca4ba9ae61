//! PostgreSQL-backed credential store.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::CredentialStore;
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UserAccount};

#[derive(Clone)]
pub struct PgCredentialStore {
    pool: DbPool,
}

impl PgCredentialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn identifier_taken(&self, username: &str, email: &str) -> AppResult<bool> {
        db::user_exists(&self.pool, username, email).await
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<UserAccount> {
        let username = new_user.username.clone();
        match db::user_create(&self.pool, new_user).await? {
            Some(user) => Ok(user),
            None => {
                debug!(username = %username, "insert skipped by unique index");
                Err(AppError::DuplicateIdentifier)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        db::user_find_by_username(&self.pool, username).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>> {
        db::user_get_by_id(&self.pool, id).await
    }
}
