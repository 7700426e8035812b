/// OAuth account model and database operations
///
/// An account links a user to one external identity provider. A user may
/// hold several accounts (one per provider), and the provider-side identity
/// is what makes an account unique, not the local user.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE accounts (
///     id UUID NOT NULL DEFAULT gen_random_uuid(),
///     user_id VARCHAR(255) NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     type VARCHAR(255) NOT NULL,
///     provider VARCHAR(255) NOT NULL,
///     provider_account_id VARCHAR(255) NOT NULL,
///     refresh_token TEXT,
///     access_token TEXT,
///     expires_at INTEGER,
///     token_type VARCHAR(255),
///     scope VARCHAR(255),
///     id_token TEXT,
///     session_state VARCHAR(255),
///     PRIMARY KEY (provider, provider_account_id)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::StoreResult;

/// OAuth account linking a user to an identity provider
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Row id, distinct from the (provider, provider_account_id) key
    pub id: Uuid,

    /// Owning user
    pub user_id: String,

    /// Account kind as reported by the provider, e.g. "oauth"
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: String,

    /// Provider name, e.g. "github"
    pub provider: String,

    /// User id on the provider's side
    pub provider_account_id: String,

    pub refresh_token: Option<String>,
    pub access_token: Option<String>,

    /// Access token expiry as a unix timestamp
    pub expires_at: Option<i32>,

    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
    pub session_state: Option<String>,
}

/// Input for linking a provider account to a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LinkAccount {
    #[validate(length(min = 1, max = 255))]
    pub user_id: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 255))]
    pub account_type: String,

    #[validate(length(min = 1, max = 255))]
    pub provider: String,

    #[validate(length(min = 1, max = 255))]
    pub provider_account_id: String,

    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    pub expires_at: Option<i32>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
    pub session_state: Option<String>,
}

impl Account {
    /// Links a provider account to a user
    ///
    /// Linking the same (provider, provider_account_id) twice violates the
    /// primary key and surfaces as [`crate::error::StoreError::Storage`].
    pub async fn link(pool: &PgPool, data: LinkAccount) -> StoreResult<Self> {
        data.validate()?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (user_id, type, provider, provider_account_id,
                                  refresh_token, access_token, expires_at,
                                  token_type, scope, id_token, session_state)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, type, provider, provider_account_id,
                      refresh_token, access_token, expires_at, token_type,
                      scope, id_token, session_state
            "#,
        )
        .bind(data.user_id)
        .bind(data.account_type)
        .bind(data.provider)
        .bind(data.provider_account_id)
        .bind(data.refresh_token)
        .bind(data.access_token)
        .bind(data.expires_at)
        .bind(data.token_type)
        .bind(data.scope)
        .bind(data.id_token)
        .bind(data.session_state)
        .fetch_one(pool)
        .await?;

        Ok(account)
    }

    /// Finds an account by its provider-side identity
    pub async fn find_by_provider(
        pool: &PgPool,
        provider: &str,
        provider_account_id: &str,
    ) -> StoreResult<Option<Self>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, type, provider, provider_account_id,
                   refresh_token, access_token, expires_at, token_type,
                   scope, id_token, session_state
            FROM accounts
            WHERE provider = $1 AND provider_account_id = $2
            "#,
        )
        .bind(provider)
        .bind(provider_account_id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Lists all accounts linked to a user
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> StoreResult<Vec<Self>> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, type, provider, provider_account_id,
                   refresh_token, access_token, expires_at, token_type,
                   scope, id_token, session_state
            FROM accounts
            WHERE user_id = $1
            ORDER BY provider
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    /// Unlinks a provider account
    ///
    /// Returns whether a row was removed.
    pub async fn unlink(
        pool: &PgPool,
        provider: &str,
        provider_account_id: &str,
    ) -> StoreResult<bool> {
        let result = sqlx::query(
            "DELETE FROM accounts WHERE provider = $1 AND provider_account_id = $2",
        )
        .bind(provider)
        .bind(provider_account_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
