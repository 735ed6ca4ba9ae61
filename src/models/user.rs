//! User account as owned by the credential store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user: identity plus hashed secret.
#[derive(Debug, Clone, FromRow)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Store input for a registration; the secret is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    /// Materialize the account a store will persist.
    pub fn into_account(self) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Public view of an account (no secret).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
}

impl From<UserAccount> for UserProfile {
    fn from(user: UserAccount) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_omits_password_hash() {
        let account = NewUser {
            username: "eric".into(),
            email: "eric@example.com".into(),
            first_name: Some("Eric".into()),
            last_name: None,
            password_hash: "$argon2id$secret".into(),
        }
        .into_account();
        let json = serde_json::to_value(UserProfile::from(account)).unwrap();
        assert_eq!(json["username"], "eric");
        assert_eq!(json["firstName"], "Eric");
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
