/// Database models for Trellis
///
/// This module contains all database models and their persistence
/// operations. Every entity is created once via its POST endpoint and read
/// back via GET; there are no update or delete operations in this system.
///
/// # Models
///
/// - `user`: User accounts
/// - `board`: Boards and their admin memberships (transactional creation)
/// - `list`: Lists belonging to a board
/// - `card`: Cards belonging to a list
/// - `card_membership`: Card-user join rows (owner assignment and lookup)
///
/// # Example
///
/// ```no_run
/// use trellis_shared::models::user::{CreateUser, User};
/// use trellis_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Ada Lovelace".to_string(),
///         email: "ada@example.com".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod board;
pub mod card;
pub mod card_membership;
pub mod list;
pub mod user;
