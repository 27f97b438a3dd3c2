use log::info;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::backend::storage::PersistenceError;

/// DbConnection manages the SQLite pool and schema
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self, PersistenceError> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await? {
            Sqlite::create_database(url).await?;
            info!("Created database {}", url);
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a uniquely named in-memory test database.
    ///
    /// A single connection that never idles out keeps the database alive for
    /// the lifetime of the pool.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self, PersistenceError> {
        let url = format!("sqlite:file:motoflow_test_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&url)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
        // Create expenses table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                label TEXT NOT NULL,
                amount REAL NOT NULL CHECK (amount >= 0),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for ordering by date
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_expenses_date
            ON expenses(date, id);
            "#,
        )
        .execute(pool)
        .await?;

        // Create daily_records table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS daily_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                rides_completed INTEGER NOT NULL CHECK (rides_completed >= 0),
                earnings_computed REAL NOT NULL,
                earnings_actual REAL NOT NULL,
                daily_target REAL NOT NULL,
                utilization_pct REAL NOT NULL,
                status TEXT NOT NULL CHECK (status IN ('above_target', 'below_target')),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_daily_records_date
            ON daily_records(date, id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
