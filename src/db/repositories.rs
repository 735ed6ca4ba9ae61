//! User queries. Uniqueness is enforced by the `LOWER(username)` and
//! `LOWER(email)` unique indexes.

use crate::error::AppResult;
use crate::models::{NewUser, UserAccount};
use uuid::Uuid;

use super::DbPool;

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, created_at";

/// Insert a user. Returns `None` when the username or email is already taken.
pub async fn user_create(pool: &DbPool, new_user: NewUser) -> AppResult<Option<UserAccount>> {
    let account = new_user.into_account();
    let row = sqlx::query_as::<_, UserAccount>(&format!(
        r#"
        INSERT INTO users (id, username, email, first_name, last_name, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT DO NOTHING
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(account.id)
    .bind(&account.username)
    .bind(&account.email)
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(&account.password_hash)
    .bind(account.created_at)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn user_exists(pool: &DbPool, username: &str, email: &str) -> AppResult<bool> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(username) = LOWER($1) OR LOWER(email) = LOWER($2))",
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

pub async fn user_find_by_username(pool: &DbPool, username: &str) -> AppResult<Option<UserAccount>> {
    let row = sqlx::query_as::<_, UserAccount>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE LOWER(username) = LOWER($1)"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn user_get_by_id(pool: &DbPool, id: Uuid) -> AppResult<Option<UserAccount>> {
    let row = sqlx::query_as::<_, UserAccount>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
