//! SQLite implementation of [`RecordStore`].
//!
//! Rows are returned ordered by date, with rows on the same date kept in
//! insertion order through the autoincrement id.

pub mod connection;
pub mod daily_record_repository;
pub mod expense_repository;

pub use connection::DbConnection;
pub use daily_record_repository::DailyRecordRepository;
pub use expense_repository::ExpenseRepository;

use async_trait::async_trait;

use crate::backend::domain::models::{DailyPerformanceRecord, ExpenseRecord};
use crate::backend::storage::{PersistenceError, RecordKind, RecordStore};

/// Record store backed by a SQLite database
#[derive(Clone)]
pub struct SqliteRecordStore {
    db: DbConnection,
    expense_repository: ExpenseRepository,
    daily_record_repository: DailyRecordRepository,
}

impl SqliteRecordStore {
    pub fn new(db: DbConnection) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(db.clone()),
            daily_record_repository: DailyRecordRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, PersistenceError> {
        self.expense_repository.list_expenses().await
    }

    async fn append_expense(&self, record: &ExpenseRecord) -> Result<(), PersistenceError> {
        self.expense_repository.store_expense(record).await
    }

    async fn load_daily_records(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError> {
        self.daily_record_repository.list_daily_records().await
    }

    async fn append_daily_record(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError> {
        self.daily_record_repository.store_daily_record(record).await
    }

    async fn count(&self, kind: RecordKind) -> Result<usize, PersistenceError> {
        let query = format!("SELECT COUNT(*) FROM {}", kind.table_name());
        let count: i64 = sqlx::query_scalar(&query).fetch_one(self.db.pool()).await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
