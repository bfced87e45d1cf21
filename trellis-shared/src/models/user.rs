/// User model and database operations
///
/// Users are created directly from a validated payload and are immutable
/// afterwards; they are referenced by board admin memberships and card
/// owner memberships.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User model representing a user account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4, generated by the store)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// When the user account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Creates a new user and returns the inserted row
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or the insert is
    /// rejected.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };

        assert_eq!(create_user.name, "Test User");
        assert_eq!(create_user.email, "test@example.com");
    }

    // Integration tests for database operations are in trellis-api/tests/
}
