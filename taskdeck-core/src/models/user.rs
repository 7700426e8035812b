/// User model and database operations
///
/// Users back the credential and OAuth sign-in flows. Every profile field
/// except the role and two-factor flag is nullable: an OAuth-created user
/// has no password, a credential-created user has no image, and the email
/// stays unverified until the verification flow completes.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE user_role AS ENUM ('ADMIN', 'USER');
///
/// CREATE TABLE users (
///     id VARCHAR(255) PRIMARY KEY,
///     name VARCHAR(255),
///     email VARCHAR(255) UNIQUE,
///     email_verified TIMESTAMPTZ,
///     image VARCHAR(255),
///     password VARCHAR(255),
///     role user_role NOT NULL DEFAULT 'USER',
///     is_two_factor_enabled BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// The `password` column holds an Argon2id hash from
/// [`crate::auth::password::hash_password`], never a plaintext password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::error::StoreResult;
use crate::ids;

/// Authorization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Converts role to its wire/database form
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

/// User model representing an account holder
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id (30 lowercase alphanumeric characters)
    pub id: String,

    /// Display name
    pub name: Option<String>,

    /// Email address, unique when present
    pub email: Option<String>,

    /// When the email was verified, NULL while unverified
    pub email_verified: Option<DateTime<Utc>>,

    /// Avatar URL
    pub image: Option<String>,

    /// Argon2id password hash, NULL for OAuth-only users
    pub password: Option<String>,

    /// Authorization role
    pub role: UserRole,

    /// Whether sign-in requires a second factor
    pub is_two_factor_enabled: bool,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    /// Display name
    #[validate(length(max = 255))]
    pub name: Option<String>,

    /// Email address
    #[validate(email)]
    pub email: Option<String>,

    /// Pre-hashed password
    #[validate(length(max = 255))]
    pub password: Option<String>,

    /// Avatar URL
    #[validate(length(max = 255))]
    pub image: Option<String>,

    /// Role (default: USER)
    pub role: Option<UserRole>,
}

/// Input for updating a user
///
/// Outer `Option` means "should this field change", inner `Option` means
/// "what value, where NULL clears it". Fields that can never be NULL take a
/// single `Option`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub email_verified: Option<Option<DateTime<Utc>>>,
    pub image: Option<Option<String>>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub is_two_factor_enabled: Option<bool>,
}

impl User {
    /// Creates a new user
    ///
    /// The id is generated here; role falls back to USER and the two-factor
    /// flag starts disabled.
    pub async fn create(pool: &PgPool, data: CreateUser) -> StoreResult<Self> {
        data.validate()?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password, image, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, email_verified, image, password, role,
                      is_two_factor_enabled
            "#,
        )
        .bind(ids::generate_id())
        .bind(data.name)
        .bind(data.email)
        .bind(data.password)
        .bind(data.image)
        .bind(data.role.unwrap_or_default())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, email_verified, image, password, role,
                   is_two_factor_enabled
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> StoreResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, email_verified, image, password, role,
                   is_two_factor_enabled
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Updates a user, returning the new state
    ///
    /// Returns `Ok(None)` when no row has the given id. A unique-email
    /// violation surfaces as [`crate::error::StoreError::Storage`].
    pub async fn update(
        pool: &PgPool,
        id: &str,
        data: UpdateUser,
    ) -> StoreResult<Option<Self>> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE users SET id = id");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.email.is_some() {
            bind_count += 1;
            query.push_str(&format!(", email = ${}", bind_count));
        }
        if data.email_verified.is_some() {
            bind_count += 1;
            query.push_str(&format!(", email_verified = ${}", bind_count));
        }
        if data.image.is_some() {
            bind_count += 1;
            query.push_str(&format!(", image = ${}", bind_count));
        }
        if data.password.is_some() {
            bind_count += 1;
            query.push_str(&format!(", password = ${}", bind_count));
        }
        if data.role.is_some() {
            bind_count += 1;
            query.push_str(&format!(", role = ${}", bind_count));
        }
        if data.is_two_factor_enabled.is_some() {
            bind_count += 1;
            query.push_str(&format!(", is_two_factor_enabled = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, email, email_verified, image, \
             password, role, is_two_factor_enabled",
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(email) = data.email {
            q = q.bind(email);
        }
        if let Some(email_verified) = data.email_verified {
            q = q.bind(email_verified);
        }
        if let Some(image) = data.image {
            q = q.bind(image);
        }
        if let Some(password) = data.password {
            q = q.bind(password);
        }
        if let Some(role) = data.role {
            q = q.bind(role);
        }
        if let Some(flag) = data.is_two_factor_enabled {
            q = q.bind(flag);
        }

        let user = q.fetch_optional(pool).await?;

        Ok(user)
    }

    /// Deletes a user
    ///
    /// Linked accounts go with it through the foreign key cascade. Returns
    /// whether a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists users ordered by id
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> StoreResult<Vec<Self>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, email_verified, image, password, role,
                   is_two_factor_enabled
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Counts all users
    pub async fn count(pool: &PgPool) -> StoreResult<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
