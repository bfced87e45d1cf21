/// Database migration runner
///
/// Thin wrapper around sqlx's migration system. Migration files live in
/// the `migrations/` directory at the workspace root:
/// - `{timestamp}_{name}.up.sql` - the "up" migration
/// - `{timestamp}_{name}.down.sql` - the "down" migration (rollback)
///
/// # Example
///
/// ```no_run
/// use trellis_shared::db::pool::{create_pool, DatabaseConfig};
/// use trellis_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///
///     Ok(())
/// }
/// ```

use sqlx::postgres::PgPool;
use tracing::{debug, info, warn};

/// Migration status information
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Number of migrations that have been applied
    pub applied_migrations: usize,

    /// Latest applied migration version (timestamp)
    pub latest_version: Option<i64>,
}

/// Runs all pending database migrations
///
/// Creates the `_sqlx_migrations` bookkeeping table on first run. A failed
/// migration is rolled back and returned as an error.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Gets the current migration status
///
/// Reports how many migrations have been applied and the latest version.
pub async fn get_migration_status(pool: &PgPool) -> Result<MigrationStatus, sqlx::Error> {
    debug!("Checking migration status");

    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = '_sqlx_migrations'
        )",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        debug!("Migrations table does not exist yet");
        return Ok(MigrationStatus {
            applied_migrations: 0,
            latest_version: None,
        });
    }

    let (count, latest_version): (i64, Option<i64>) = sqlx::query_as(
        "SELECT
            COUNT(*) as count,
            MAX(version) as latest_version
         FROM _sqlx_migrations
         WHERE success = true",
    )
    .fetch_one(pool)
    .await?;

    debug!(
        applied_migrations = count,
        latest_version = ?latest_version,
        "Migration status retrieved"
    );

    Ok(MigrationStatus {
        applied_migrations: count as usize,
        latest_version,
    })
}
