//! Process-local [`RecordStore`] used for tests and throwaway sessions.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{PersistenceError, RecordStore};
use crate::backend::domain::models::{DailyPerformanceRecord, ExpenseRecord};

#[derive(Default)]
struct Tables {
    expenses: Vec<ExpenseRecord>,
    daily_records: Vec<DailyPerformanceRecord>,
}

/// Record store that keeps everything in memory. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, PersistenceError> {
        let mut tables = self.tables.lock().map_err(|_| PersistenceError::Poisoned)?;
        Ok(f(&mut tables))
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, PersistenceError> {
        self.with_tables(|tables| tables.expenses.clone())
    }

    async fn append_expense(&self, record: &ExpenseRecord) -> Result<(), PersistenceError> {
        self.with_tables(|tables| tables.expenses.push(record.clone()))
    }

    async fn load_daily_records(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError> {
        self.with_tables(|tables| tables.daily_records.clone())
    }

    async fn append_daily_record(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError> {
        self.with_tables(|tables| tables.daily_records.push(record.clone()))
    }
}
