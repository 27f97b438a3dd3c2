//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different storage
//! backends (CSV files, SQLite, process memory) to be used interchangeably in
//! the domain layer.

use async_trait::async_trait;
use std::fmt;

use super::PersistenceError;
use crate::backend::domain::models::{DailyPerformanceRecord, ExpenseRecord};

/// The two tables the dashboard accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Expense,
    DailyPerformance,
}

impl RecordKind {
    /// Table name used by relational backends
    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::Expense => "expenses",
            RecordKind::DailyPerformance => "daily_records",
        }
    }

    /// File name used by the CSV backend
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Expense => "expenses.csv",
            RecordKind::DailyPerformance => "daily_records.csv",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Expense => write!(f, "expense"),
            RecordKind::DailyPerformance => write!(f, "daily performance"),
        }
    }
}

/// Append-only record storage with the same contract on every backend.
///
/// - Loading a table that has never been written returns an empty vector.
/// - An append adds exactly one record and never drops earlier ones. If it
///   fails, stored data is left as it was.
/// - Records come back in insertion order unless the backend documents a
///   different durable order. Callers that need chronological order sort.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    async fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, PersistenceError>;

    async fn append_expense(&self, record: &ExpenseRecord) -> Result<(), PersistenceError>;

    async fn load_daily_records(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError>;

    async fn append_daily_record(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError>;

    /// Number of stored records of one kind
    async fn count(&self, kind: RecordKind) -> Result<usize, PersistenceError> {
        match kind {
            RecordKind::Expense => Ok(self.load_expenses().await?.len()),
            RecordKind::DailyPerformance => Ok(self.load_daily_records().await?.len()),
        }
    }
}
