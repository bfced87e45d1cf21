/// Card membership model and database operations
///
/// Join rows linking a user to a card. The creation endpoint only ever
/// assigns an owner (`is_owner = TRUE`); both foreign keys are derived
/// from the request path by the caller.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE card_memberships (
///     card_id UUID NOT NULL REFERENCES cards(id) ON DELETE CASCADE,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     is_owner BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (card_id, user_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Card membership model representing a card-user relationship
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardMembership {
    /// Card ID
    #[serde(rename = "cardId")]
    pub card_id: Uuid,

    /// User ID
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    /// Whether this user owns the card
    #[serde(rename = "isOwner")]
    pub is_owner: bool,

    /// When the membership was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new card membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardMembership {
    /// Card ID, taken from the request path
    #[serde(rename = "cardId")]
    pub card_id: Uuid,

    /// User ID, taken from the request path
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    /// Owner flag; the creation endpoint forces this to true
    #[serde(rename = "isOwner")]
    pub is_owner: bool,
}

/// Owner lookup row: the owning user joined with the card it owns
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardOwner {
    /// Card the user owns
    #[serde(rename = "cardId")]
    pub card_id: Uuid,

    /// Owning user's ID
    pub id: Uuid,

    /// Owning user's name
    pub name: String,

    /// Owning user's email
    pub email: String,

    /// When the owning user account was created
    pub created_at: DateTime<Utc>,
}

impl CardMembership {
    /// Creates a new card membership and returns the inserted row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The membership already exists (primary key violation)
    /// - The card or user does not exist (foreign key violation)
    /// - The database connection fails
    pub async fn create(pool: &PgPool, data: CreateCardMembership) -> Result<Self, sqlx::Error> {
        let membership = sqlx::query_as::<_, CardMembership>(
            r#"
            INSERT INTO card_memberships (card_id, user_id, is_owner)
            VALUES ($1, $2, $3)
            RETURNING card_id, user_id, is_owner, created_at
            "#,
        )
        .bind(data.card_id)
        .bind(data.user_id)
        .bind(data.is_owner)
        .fetch_one(pool)
        .await?;

        Ok(membership)
    }

    /// Finds the owner of a card
    ///
    /// Three-way join (card → membership → user) filtered to
    /// `is_owner = TRUE`. Returns `None` when no owner has been assigned,
    /// which the handler maps to 404 rather than an empty list.
    pub async fn find_owner(pool: &PgPool, card_id: Uuid) -> Result<Option<CardOwner>, sqlx::Error> {
        let owner = sqlx::query_as::<_, CardOwner>(
            r#"
            SELECT c.id AS card_id, u.id, u.name, u.email, u.created_at
            FROM cards c
            JOIN card_memberships cm ON cm.card_id = c.id
            JOIN users u ON u.id = cm.user_id
            WHERE c.id = $1 AND cm.is_owner IS TRUE
            "#,
        )
        .bind(card_id)
        .fetch_optional(pool)
        .await?;

        Ok(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_card_membership_deserializes_camel_case() {
        let card_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let payload = serde_json::json!({
            "cardId": card_id.to_string(),
            "userId": user_id.to_string(),
            "isOwner": false,
        });

        let data: CreateCardMembership = serde_json::from_value(payload).unwrap();
        assert_eq!(data.card_id, card_id);
        assert_eq!(data.user_id, user_id);
        assert!(!data.is_owner);
    }

    #[test]
    fn test_card_membership_serializes_camel_case() {
        let membership = CardMembership {
            card_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            is_owner: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&membership).unwrap();
        assert!(json.get("cardId").is_some());
        assert!(json.get("isOwner").is_some());
        assert_eq!(json["isOwner"], serde_json::json!(true));
    }
}
