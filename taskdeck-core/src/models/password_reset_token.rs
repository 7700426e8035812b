/// Password reset token model and database operations
///
/// Same lifecycle as the verification token: issued with a one hour
/// lifetime, one live token per email, consumed (deleted) when the reset
/// completes. Kept in its own table so that resetting a password cannot
/// interfere with a pending email verification.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE password_reset_tokens (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email VARCHAR(255) NOT NULL UNIQUE,
///     token VARCHAR(255) NOT NULL UNIQUE,
///     expires TIMESTAMPTZ NOT NULL
/// );
/// ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreResult;

/// Lifetime of a freshly issued token
const TOKEN_TTL_HOURS: i64 = 1;

/// Password reset token
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PasswordResetToken {
    pub id: Uuid,

    /// Address the reset was requested for
    pub email: String,

    /// Opaque token value handed to the user
    pub token: String,

    /// Instant after which the token is no longer honored
    pub expires: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Issues a fresh token for an email, replacing any existing one
    pub async fn issue(pool: &PgPool, email: &str) -> StoreResult<Self> {
        let token = Uuid::new_v4().to_string();
        let expires = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM password_reset_tokens WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await?;

        let issued = sqlx::query_as::<_, PasswordResetToken>(
            r#"
            INSERT INTO password_reset_tokens (email, token, expires)
            VALUES ($1, $2, $3)
            RETURNING id, email, token, expires
            "#,
        )
        .bind(email)
        .bind(token)
        .bind(expires)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(issued)
    }

    /// Finds the outstanding token for an email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> StoreResult<Option<Self>> {
        let token = sqlx::query_as::<_, PasswordResetToken>(
            r#"
            SELECT id, email, token, expires
            FROM password_reset_tokens
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(token)
    }

    /// Finds a token by its value
    pub async fn find_by_token(pool: &PgPool, token: &str) -> StoreResult<Option<Self>> {
        let found = sqlx::query_as::<_, PasswordResetToken>(
            r#"
            SELECT id, email, token, expires
            FROM password_reset_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(found)
    }

    /// Deletes a token after it has been consumed
    ///
    /// Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether the token has passed its expiry
    pub fn is_expired(&self) -> bool {
        self.expires < Utc::now()
    }
}
