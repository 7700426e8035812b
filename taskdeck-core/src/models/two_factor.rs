/// Two-factor token and confirmation models
///
/// Two pieces back the second sign-in factor. The token is the short-lived
/// six digit code emailed to the user; the confirmation is a marker row
/// recording that the current sign-in already passed the second factor, and
/// it is consumed on the next session issuance.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE two_factor_tokens (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email VARCHAR(255) NOT NULL,
///     token VARCHAR(255) NOT NULL UNIQUE,
///     expires TIMESTAMPTZ NOT NULL
/// );
///
/// CREATE TABLE two_factor_confirmations (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id VARCHAR(255) NOT NULL REFERENCES users(id)
/// );
/// CREATE UNIQUE INDEX two_factor_confirmations_user_id_idx
///     ON two_factor_confirmations (user_id);
/// ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::ids;

/// Lifetime of a freshly issued code
const TOKEN_TTL_MINUTES: i64 = 5;

/// Six digit second-factor code
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TwoFactorToken {
    pub id: Uuid,

    /// Address the code was sent to
    pub email: String,

    /// The six digit code itself
    pub token: String,

    /// Instant after which the code is no longer honored
    pub expires: DateTime<Utc>,
}

impl TwoFactorToken {
    /// Issues a fresh code for an email, replacing any existing one
    pub async fn issue(pool: &PgPool, email: &str) -> StoreResult<Self> {
        let token = ids::generate_two_factor_code();
        let expires = Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES);

        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM two_factor_tokens WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await?;

        let issued = sqlx::query_as::<_, TwoFactorToken>(
            r#"
            INSERT INTO two_factor_tokens (email, token, expires)
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

    /// Finds the outstanding code for an email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> StoreResult<Option<Self>> {
        let token = sqlx::query_as::<_, TwoFactorToken>(
            r#"
            SELECT id, email, token, expires
            FROM two_factor_tokens
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(token)
    }

    /// Finds a code by its value
    pub async fn find_by_token(pool: &PgPool, token: &str) -> StoreResult<Option<Self>> {
        let found = sqlx::query_as::<_, TwoFactorToken>(
            r#"
            SELECT id, email, token, expires
            FROM two_factor_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(found)
    }

    /// Deletes a code after it has been consumed
    ///
    /// Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM two_factor_tokens WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether the code has passed its expiry
    pub fn is_expired(&self) -> bool {
        self.expires < Utc::now()
    }
}

/// Marker recording a completed second factor for a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TwoFactorConfirmation {
    pub id: Uuid,

    /// User the confirmation belongs to, at most one row per user
    pub user_id: String,
}

impl TwoFactorConfirmation {
    /// Records a completed second factor for a user
    ///
    /// A second confirmation for the same user violates the unique index
    /// and surfaces as [`crate::error::StoreError::Storage`].
    pub async fn create(pool: &PgPool, user_id: &str) -> StoreResult<Self> {
        let confirmation = sqlx::query_as::<_, TwoFactorConfirmation>(
            r#"
            INSERT INTO two_factor_confirmations (user_id)
            VALUES ($1)
            RETURNING id, user_id
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(confirmation)
    }

    /// Finds the confirmation for a user
    pub async fn find_by_user(pool: &PgPool, user_id: &str) -> StoreResult<Option<Self>> {
        let confirmation = sqlx::query_as::<_, TwoFactorConfirmation>(
            r#"
            SELECT id, user_id
            FROM two_factor_confirmations
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(confirmation)
    }

    /// Consumes a confirmation
    ///
    /// Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM two_factor_confirmations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
