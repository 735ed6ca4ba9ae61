//! Credential stores: where user accounts live.

mod memory_repo;
mod pg_repo;

pub use memory_repo::MemoryCredentialStore;
pub use pg_repo::PgCredentialStore;

use crate::error::AppResult;
use crate::models::{NewUser, UserAccount};
use async_trait::async_trait;
use uuid::Uuid;

/// Persists user identity and answers the lookups login needs.
///
/// Username and email are unique case-insensitively. `create_user` is the
/// authoritative uniqueness check and fails with
/// [`AppError::DuplicateIdentifier`](crate::error::AppError::DuplicateIdentifier).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Whether either identifier is already registered.
    async fn identifier_taken(&self, username: &str, email: &str) -> AppResult<bool>;

    async fn create_user(&self, new_user: NewUser) -> AppResult<UserAccount>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>>;
}
