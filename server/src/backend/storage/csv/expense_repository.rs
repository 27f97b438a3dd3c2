//! # CSV Expense Repository
//!
//! Stores expenses in `{data_directory}/expenses.csv`.
//!
//! ```csv
//! date,label,amount
//! 2024-03-01,Fuel,120.0
//! 2024-03-02,Phone plan,45.9
//! ```

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use super::connection::CsvConnection;
use crate::backend::domain::models::{ExpenseRecord, EXPENSE_COLUMNS};
use crate::backend::storage::{PersistenceError, RecordKind};

/// CSV record structure for expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRow {
    date: String,
    label: String,
    amount: f64,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        ExpenseRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            label: record.label.clone(),
            amount: record.amount,
        }
    }
}

impl ExpenseRow {
    fn into_record(self, row: usize) -> Result<ExpenseRecord, PersistenceError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| PersistenceError::Corrupt {
            kind: RecordKind::Expense,
            row,
            reason: format!("invalid date '{}': {}", self.date, e),
        })?;

        Ok(ExpenseRecord {
            date,
            label: self.label,
            amount: self.amount,
        })
    }
}

/// CSV-based expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all expenses in file order
    pub fn load(&self) -> Result<Vec<ExpenseRecord>, PersistenceError> {
        let rows: Vec<ExpenseRow> = self.connection.read_rows(RecordKind::Expense)?;

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| row.into_record(index + 1))
            .collect()
    }

    /// Append one expense, keeping every existing row
    pub fn append(&self, record: &ExpenseRecord) -> Result<(), PersistenceError> {
        let mut rows: Vec<ExpenseRow> = self.connection.read_rows(RecordKind::Expense)?;
        rows.push(ExpenseRow::from(record));

        self.connection.write_rows(RecordKind::Expense, &EXPENSE_COLUMNS, &rows)?;

        info!("Stored expense '{}' ({:.2}) in CSV, {} rows total", record.label, record.amount, rows.len());
        Ok(())
    }
}
