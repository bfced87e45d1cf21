/// Board model and database operations
///
/// Boards are created together with exactly one admin membership row in a
/// single transaction: a board with zero memberships must never be
/// observable. The atomicity is enforced here, not by the schema.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE boards (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE TABLE board_memberships (
///     board_id UUID NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     is_admin BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (board_id, user_id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use trellis_shared::models::board::{Board, CreateBoard};
/// use trellis_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example(admin_user_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let board = Board::create(
///     &pool,
///     CreateBoard {
///         name: "Sprint".to_string(),
///         admin_user_id,
///     },
/// )
/// .await?;
/// println!("Created board: {}", board.id);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Board model representing a top-level container of lists
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID (UUID v4, generated by the store)
    pub id: Uuid,

    /// Board name
    pub name: String,

    /// When the board was created
    pub created_at: DateTime<Utc>,
}

/// Board row joined with its admin membership, as returned by GET /boards
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BoardWithAdmin {
    /// Board ID
    pub id: Uuid,

    /// Board name
    pub name: String,

    /// User ID of the admin membership created with the board
    #[serde(rename = "adminUserId")]
    pub admin_user_id: Uuid,

    /// When the board was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new board
///
/// The admin user becomes the board's single admin membership, inserted in
/// the same transaction as the board row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoard {
    /// Board name
    pub name: String,

    /// User to register as the board admin
    #[serde(rename = "adminUserId")]
    pub admin_user_id: Uuid,
}

impl Board {
    /// Creates a board and its admin membership atomically
    ///
    /// Checks a dedicated connection out of the pool, begins a transaction,
    /// inserts the board row, reads back its generated id, inserts the
    /// admin membership with that id, and commits. Any failure after BEGIN
    /// rolls the transaction back before the error is surfaced, so a board
    /// without its membership is never visible to readers. The connection
    /// is returned to the pool on every exit path (the sqlx transaction
    /// guard also rolls back on drop).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The admin user does not exist (foreign key violation)
    /// - The database connection fails at any step
    pub async fn create(pool: &PgPool, data: CreateBoard) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;

        match Self::create_in_tx(&mut tx, &data).await {
            Ok(board) => {
                tx.commit().await?;
                tracing::debug!(board_id = %board.id, admin_user_id = %data.admin_user_id, "Board created");
                Ok(board)
            }
            Err(err) => {
                // Surface the insert failure even if the rollback itself errors.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback failed after board creation error");
                }
                Err(err)
            }
        }
    }

    /// Runs the two dependent inserts on the transaction
    ///
    /// The board insert must complete and yield its generated id before the
    /// membership insert is issued.
    async fn create_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        data: &CreateBoard,
    ) -> Result<Self, sqlx::Error> {
        let board = sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO boards (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&data.name)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO board_memberships (board_id, user_id, is_admin)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(board.id)
        .bind(data.admin_user_id)
        .bind(true)
        .execute(&mut **tx)
        .await?;

        Ok(board)
    }

    /// Lists all boards with their admin membership, oldest first
    ///
    /// Inner join is correct here: a board without an admin membership is
    /// unobservable by construction.
    pub async fn list_with_admin(pool: &PgPool) -> Result<Vec<BoardWithAdmin>, sqlx::Error> {
        let boards = sqlx::query_as::<_, BoardWithAdmin>(
            r#"
            SELECT b.id, b.name, bm.user_id AS admin_user_id, b.created_at
            FROM boards b
            JOIN board_memberships bm ON bm.board_id = b.id
            WHERE bm.is_admin IS TRUE
            ORDER BY b.created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(boards)
    }
}
