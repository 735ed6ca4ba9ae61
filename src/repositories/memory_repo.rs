//! In-process credential store for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CredentialStore;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UserAccount};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, UserAccount>,
    // lowercased username / email -> id
    usernames: HashMap<String, Uuid>,
    emails: HashMap<String, Uuid>,
}

/// Map-backed store. Check-and-insert happens under one write lock.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Accounts>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn identifier_taken(&self, username: &str, email: &str) -> AppResult<bool> {
        let accounts = self.inner.read().await;
        Ok(accounts.usernames.contains_key(&username.to_lowercase())
            || accounts.emails.contains_key(&email.to_lowercase()))
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<UserAccount> {
        let username_key = new_user.username.to_lowercase();
        let email_key = new_user.email.to_lowercase();

        let mut accounts = self.inner.write().await;
        if accounts.usernames.contains_key(&username_key) || accounts.emails.contains_key(&email_key)
        {
            return Err(AppError::DuplicateIdentifier);
        }

        let account = new_user.into_account();
        accounts.usernames.insert(username_key, account.id);
        accounts.emails.insert(email_key, account.id);
        accounts.by_id.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        let accounts = self.inner.read().await;
        Ok(accounts
            .usernames
            .get(&username.to_lowercase())
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }
}
