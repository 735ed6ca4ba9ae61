//! JWT issue and validation.

use crate::error::{AppError, AppResult};
use crate::models::UserAccount;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AppError::Jwt(e.to_string()))
    }
}

/// Token issuer: HS256 tokens bound to one issuer and lifetime.
#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
    issuer: String,
    expiry: Duration,
}

impl JwtSecret {
    pub fn new(secret: String, issuer: String, expiry_secs: i64) -> Self {
        Self {
            secret,
            issuer,
            expiry: Duration::seconds(expiry_secs),
        }
    }

    pub fn issue(&self, user: &UserAccount) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iss: self.issuer.clone(),
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.set_issuer(&[&self.issuer]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;

    const SECRET: &str = "test-jwt-secret-min-32-chars!!!!";

    fn account() -> UserAccount {
        NewUser {
            username: "eric".into(),
            email: "eric@example.com".into(),
            first_name: None,
            last_name: None,
            password_hash: "hash".into(),
        }
        .into_account()
    }

    #[test]
    fn issued_token_validates() {
        let jwt = JwtSecret::new(SECRET.into(), "voltshop".into(), 3600);
        let user = account();
        let token = jwt.issue(&user).unwrap();
        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.username, "eric");
        assert_eq!(claims.iss, "voltshop");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn rejects_foreign_secret() {
        let ours = JwtSecret::new(SECRET.into(), "voltshop".into(), 3600);
        let theirs = JwtSecret::new("another-secret-that-is-long-enough".into(), "voltshop".into(), 3600);
        let token = theirs.issue(&account()).unwrap();
        assert!(matches!(ours.validate(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn rejects_foreign_issuer() {
        let ours = JwtSecret::new(SECRET.into(), "voltshop".into(), 3600);
        let theirs = JwtSecret::new(SECRET.into(), "elsewhere".into(), 3600);
        let token = theirs.issue(&account()).unwrap();
        assert!(ours.validate(&token).is_err());
    }

    #[test]
    fn rejects_expired() {
        // Past the default 60s leeway.
        let jwt = JwtSecret::new(SECRET.into(), "voltshop".into(), -600);
        let token = jwt.issue(&account()).unwrap();
        assert!(jwt.validate(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let jwt = JwtSecret::new(SECRET.into(), "voltshop".into(), 3600);
        assert!(jwt.validate("not.a.token").is_err());
    }
}
