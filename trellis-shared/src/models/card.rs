/// Card model and database operations
///
/// Cards belong to a list. The `list_id` is always derived from the
/// request path by the caller, same rule as `List.board_id`. The due date
/// is an optional free-form string, stored verbatim.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE cards (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(50) NOT NULL,
///     description VARCHAR(255) NOT NULL,
///     due_date VARCHAR(64),
///     list_id UUID NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Card model representing a single work item on a list
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    /// Unique card ID (UUID v4, generated by the store)
    pub id: Uuid,

    /// Card title
    pub title: String,

    /// Card description (may be empty)
    pub description: String,

    /// Optional due date, stored as an opaque string
    pub due_date: Option<String>,

    /// List this card belongs to
    #[serde(rename = "listId")]
    pub list_id: Uuid,

    /// When the card was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCard {
    /// Card title
    pub title: String,

    /// Card description
    pub description: String,

    /// Optional due date
    #[serde(default)]
    pub due_date: Option<String>,

    /// Owning list, taken from the request path
    #[serde(rename = "listId")]
    pub list_id: Uuid,
}

impl Card {
    /// Creates a new card and returns the inserted row
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not exist (foreign key violation)
    /// or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateCard) -> Result<Self, sqlx::Error> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (title, description, due_date, list_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, due_date, list_id, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(data.list_id)
        .fetch_one(pool)
        .await?;

        Ok(card)
    }

    /// Lists all cards on a list, oldest first
    pub async fn list_by_list(pool: &PgPool, list_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let cards = sqlx::query_as::<_, Card>(
            r#"
            SELECT id, title, description, due_date, list_id, created_at
            FROM cards
            WHERE list_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(pool)
        .await?;

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_card_without_due_date() {
        let list_id = Uuid::new_v4();
        let payload = serde_json::json!({
            "title": "Write release notes",
            "description": "",
            "listId": list_id.to_string(),
        });

        let create_card: CreateCard = serde_json::from_value(payload).unwrap();
        assert_eq!(create_card.title, "Write release notes");
        assert_eq!(create_card.description, "");
        assert!(create_card.due_date.is_none());
        assert_eq!(create_card.list_id, list_id);
    }

    #[test]
    fn test_card_due_date_keeps_snake_case() {
        let card = Card {
            id: Uuid::new_v4(),
            title: "Write release notes".to_string(),
            description: "Cover the validator changes".to_string(),
            due_date: Some("2025-07-01".to_string()),
            list_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("due_date").is_some());
        assert!(json.get("listId").is_some());
    }
}
