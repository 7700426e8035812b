/// Post model and database operations
///
/// Posts are short user-authored entries with an integer id from a
/// sequence, unlike the generated string ids everywhere else.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE posts (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(256),
///     created_by VARCHAR(255) NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::error::StoreResult;

/// Post model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Sequence-assigned id
    pub id: i32,

    /// Post body
    pub name: Option<String>,

    /// Authoring user
    pub created_by: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a post
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub created_by: String,
}

impl Post {
    /// Creates a new post
    ///
    /// The author must exist; a dangling `created_by` violates the foreign
    /// key and surfaces as [`crate::error::StoreError::Storage`].
    pub async fn create(pool: &PgPool, data: CreatePost) -> StoreResult<Self> {
        data.validate()?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (name, created_by)
            VALUES ($1, $2)
            RETURNING id, name, created_by, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.created_by)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Finds the most recent post by a user
    pub async fn latest_by_user(pool: &PgPool, user_id: &str) -> StoreResult<Option<Self>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, name, created_by, created_at, updated_at
            FROM posts
            WHERE created_by = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }
}
