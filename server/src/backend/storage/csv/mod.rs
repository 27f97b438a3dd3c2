//! # CSV Storage Module
//!
//! File-based implementation of [`RecordStore`]. Each table lives in its own
//! CSV file inside the data directory, with a header row of canonical column
//! names:
//!
//! ```text
//! data/
//! ├── expenses.csv
//! └── daily_records.csv
//! ```
//!
//! Appends rewrite the whole file through a temporary file and an atomic
//! rename. Rows are returned in file (insertion) order.

pub mod connection;
pub mod daily_record_repository;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use daily_record_repository::DailyRecordRepository;
pub use expense_repository::ExpenseRepository;

use async_trait::async_trait;

use crate::backend::domain::models::{DailyPerformanceRecord, ExpenseRecord};
use crate::backend::storage::{PersistenceError, RecordStore};

/// Record store backed by CSV files
#[derive(Clone)]
pub struct CsvRecordStore {
    expense_repository: ExpenseRepository,
    daily_record_repository: DailyRecordRepository,
}

impl CsvRecordStore {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(connection.clone()),
            daily_record_repository: DailyRecordRepository::new(connection),
        }
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    fn backend_name(&self) -> &'static str {
        "csv"
    }

    async fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, PersistenceError> {
        self.expense_repository.load()
    }

    async fn append_expense(&self, record: &ExpenseRecord) -> Result<(), PersistenceError> {
        self.expense_repository.append(record)
    }

    async fn load_daily_records(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError> {
        self.daily_record_repository.load()
    }

    async fn append_daily_record(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError> {
        self.daily_record_repository.append(record)
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::{sample_daily_record, sample_expense, TestEnvironment};
    use super::*;
    use crate::backend::storage::RecordKind;
    use shared::PerformanceStatus;

    #[tokio::test]
    async fn test_load_before_first_write_is_empty() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let store = CsvRecordStore::new(env.connection.clone());

        assert!(store.load_expenses().await?.is_empty());
        assert!(store.load_daily_records().await?.is_empty());
        assert!(!env.connection.file_path(RecordKind::Expense).exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_append_and_load_round_trip() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let store = CsvRecordStore::new(env.connection.clone());

        let expenses = vec![
            sample_expense(1, "Fuel", 120.0),
            sample_expense(2, "Chain, sprocket \"kit\"", 310.55),
            sample_expense(2, "Phone plan", 45.9),
        ];
        for expense in &expenses {
            store.append_expense(expense).await?;
        }

        let loaded = store.load_expenses().await?;
        assert_eq!(loaded, expenses);
        assert_eq!(store.count(RecordKind::Expense).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_daily_records_keep_insertion_order() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let store = CsvRecordStore::new(env.connection.clone());

        let later = sample_daily_record(5, 12, 84.0, PerformanceStatus::AboveTarget);
        let earlier = sample_daily_record(1, 2, 14.0, PerformanceStatus::BelowTarget);
        store.append_daily_record(&later).await?;
        store.append_daily_record(&earlier).await?;

        let loaded = store.load_daily_records().await?;
        assert_eq!(loaded, vec![later, earlier]);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_has_canonical_header() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let store = CsvRecordStore::new(env.connection.clone());

        store
            .append_daily_record(&sample_daily_record(1, 10, 70.0, PerformanceStatus::AboveTarget))
            .await?;

        let content = std::fs::read_to_string(env.connection.file_path(RecordKind::DailyPerformance))?;
        let header = content.lines().next().unwrap_or_default();
        assert_eq!(
            header,
            "date,rides_completed,earnings_computed,earnings_actual,daily_target,utilization_pct,status"
        );
        assert!(content.contains("above_target"));
        assert!(!env.connection.file_path(RecordKind::DailyPerformance).with_extension("tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_status_is_reported() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        std::fs::write(
            env.connection.file_path(RecordKind::DailyPerformance),
            "date,rides_completed,earnings_computed,earnings_actual,daily_target,utilization_pct,status\n\
             2024-03-01,10,70.0,70.0,30.0,233.3,sideways\n",
        )?;
        let store = CsvRecordStore::new(env.connection.clone());

        let err = store.load_daily_records().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Corrupt { row: 1, .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_append_keeps_existing_rows() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let store = CsvRecordStore::new(env.connection.clone());
        store.append_expense(&sample_expense(1, "Fuel", 120.0)).await?;

        // A directory squatting on the temp path makes the write fail
        let temp_path = env.connection.file_path(RecordKind::Expense).with_extension("tmp");
        std::fs::create_dir(&temp_path)?;

        assert!(store.append_expense(&sample_expense(2, "Tyre", 200.0)).await.is_err());

        std::fs::remove_dir(&temp_path)?;
        let loaded = store.load_expenses().await?;
        assert_eq!(loaded, vec![sample_expense(1, "Fuel", 120.0)]);
        Ok(())
    }
}
