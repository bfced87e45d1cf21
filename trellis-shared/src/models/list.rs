/// List model and database operations
///
/// Lists belong to a board. The `board_id` is always derived from the
/// request path by the caller, never trusted from a client-supplied body
/// field.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE lists (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(30) NOT NULL,
///     board_id UUID NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// List model representing a column of cards on a board
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    /// Unique list ID (UUID v4, generated by the store)
    pub id: Uuid,

    /// List name
    pub name: String,

    /// Board this list belongs to
    #[serde(rename = "boardId")]
    pub board_id: Uuid,

    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    /// List name
    pub name: String,

    /// Owning board, taken from the request path
    #[serde(rename = "boardId")]
    pub board_id: Uuid,
}

impl List {
    /// Creates a new list and returns the inserted row
    ///
    /// # Errors
    ///
    /// Returns an error if the board does not exist (foreign key violation)
    /// or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateList) -> Result<Self, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(
            r#"
            INSERT INTO lists (name, board_id)
            VALUES ($1, $2)
            RETURNING id, name, board_id, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.board_id)
        .fetch_one(pool)
        .await?;

        Ok(list)
    }

    /// Lists all lists on a board, oldest first
    pub async fn list_by_board(pool: &PgPool, board_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let lists = sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, board_id, created_at
            FROM lists
            WHERE board_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(board_id)
        .fetch_all(pool)
        .await?;

        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_list_deserializes_camel_case() {
        let board_id = Uuid::new_v4();
        let payload = serde_json::json!({
            "name": "In Progress",
            "boardId": board_id.to_string(),
        });

        let create_list: CreateList = serde_json::from_value(payload).unwrap();
        assert_eq!(create_list.name, "In Progress");
        assert_eq!(create_list.board_id, board_id);
    }

    #[test]
    fn test_list_serializes_camel_case() {
        let list = List {
            id: Uuid::new_v4(),
            name: "In Progress".to_string(),
            board_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&list).unwrap();
        assert!(json.get("boardId").is_some());
        assert!(json.get("board_id").is_none());
    }
}
