//! User service: registration and login over a credential store.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::handlers::{LoginRequest, RegistrationRequest};
use super::jwt::JwtSecret;
use super::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UserAccount};
use crate::repositories::CredentialStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn CredentialStore>,
    tokens: JwtSecret,
}

impl UserService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: JwtSecret) -> Self {
        Self { store, tokens }
    }

    /// Create an account. Fails with [`AppError::DuplicateIdentifier`] when the
    /// username or email is taken.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn register_user(&self, request: RegistrationRequest) -> AppResult<UserAccount> {
        if self
            .store
            .identifier_taken(&request.username, &request.email)
            .await?
        {
            return Err(AppError::DuplicateIdentifier);
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .store
            .create_user(NewUser {
                username: request.username,
                email: request.email,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
            })
            .await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Returns a token for valid credentials, `None` otherwise.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn login_user(&self, request: LoginRequest) -> AppResult<Option<String>> {
        let Some(user) = self.store.find_by_username(&request.username).await? else {
            debug!("unknown username");
            return Ok(None);
        };
        if !verify_password(&request.password, &user.password_hash)? {
            debug!(user_id = %user.id, "password mismatch");
            return Ok(None);
        }
        let token = self.tokens.issue(&user)?;
        info!(user_id = %user.id, "user logged in");
        Ok(Some(token))
    }

    pub async fn profile(&self, user_id: Uuid) -> AppResult<UserAccount> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Auth("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryCredentialStore;
    use tokio_test::{assert_err, assert_ok};

    fn service() -> (UserService, JwtSecret) {
        let jwt = JwtSecret::new(
            "test-jwt-secret-min-32-chars!!!!".to_string(),
            "voltshop".to_string(),
            3600,
        );
        let store = Arc::new(MemoryCredentialStore::new());
        (UserService::new(store, jwt.clone()), jwt)
    }

    fn registration(username: &str, email: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            first_name: Some("Volt".to_string()),
            last_name: None,
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_hashes_password() {
        let (svc, _) = service();
        let user = assert_ok!(svc.register_user(registration("volt", "volt@example.com")).await);
        assert_ne!(user.password_hash, "secret123");
        assert!(user.password_hash.starts_with("$argon2"));
        assert_eq!(user.first_name.as_deref(), Some("Volt"));
    }

    #[tokio::test]
    async fn register_twice_is_duplicate() {
        let (svc, _) = service();
        assert_ok!(svc.register_user(registration("volt", "volt@example.com")).await);
        let err = assert_err!(svc.register_user(registration("VOLT", "other@example.com")).await);
        assert!(matches!(err, AppError::DuplicateIdentifier));
        let err = assert_err!(svc.register_user(registration("other", "Volt@Example.com")).await);
        assert!(matches!(err, AppError::DuplicateIdentifier));
    }

    #[tokio::test]
    async fn login_issues_token_for_subject() {
        let (svc, jwt) = service();
        let user = svc.register_user(registration("volt", "volt@example.com")).await.unwrap();

        let token = svc.login_user(login("Volt", "secret123")).await.unwrap().unwrap();
        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);

        let profile = svc.profile(user.id).await.unwrap();
        assert_eq!(profile.email, "volt@example.com");
    }

    #[tokio::test]
    async fn login_failures_yield_none() {
        let (svc, _) = service();
        svc.register_user(registration("volt", "volt@example.com")).await.unwrap();
        assert!(svc.login_user(login("volt", "wrong123")).await.unwrap().is_none());
        assert!(svc.login_user(login("ghost", "secret123")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn profile_of_unknown_user_is_auth_error() {
        let (svc, _) = service();
        assert!(matches!(svc.profile(Uuid::new_v4()).await, Err(AppError::Auth(_))));
    }
}
