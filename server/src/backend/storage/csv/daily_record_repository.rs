//! # CSV Daily Record Repository
//!
//! Stores daily performance records in `{data_directory}/daily_records.csv`.
//!
//! ```csv
//! date,rides_completed,earnings_computed,earnings_actual,daily_target,utilization_pct,status
//! 2024-03-01,10,70.0,70.0,30.0,233.3,above_target
//! ```

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use shared::PerformanceStatus;

use super::connection::CsvConnection;
use crate::backend::domain::models::{DailyPerformanceRecord, DAILY_RECORD_COLUMNS};
use crate::backend::storage::{PersistenceError, RecordKind};

/// CSV record structure for daily performance
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DailyRecordRow {
    date: String,
    rides_completed: u32,
    earnings_computed: f64,
    earnings_actual: f64,
    daily_target: f64,
    utilization_pct: f64,
    status: String,
}

impl From<&DailyPerformanceRecord> for DailyRecordRow {
    fn from(record: &DailyPerformanceRecord) -> Self {
        DailyRecordRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            rides_completed: record.rides_completed,
            earnings_computed: record.earnings_computed,
            earnings_actual: record.earnings_actual,
            daily_target: record.daily_target,
            utilization_pct: record.utilization_pct,
            status: record.status.to_string(),
        }
    }
}

impl DailyRecordRow {
    fn into_record(self, row: usize) -> Result<DailyPerformanceRecord, PersistenceError> {
        let corrupt = |reason: String| PersistenceError::Corrupt {
            kind: RecordKind::DailyPerformance,
            row,
            reason,
        };

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| corrupt(format!("invalid date '{}': {}", self.date, e)))?;
        let status = self.status.parse::<PerformanceStatus>().map_err(corrupt)?;

        Ok(DailyPerformanceRecord {
            date,
            rides_completed: self.rides_completed,
            earnings_computed: self.earnings_computed,
            earnings_actual: self.earnings_actual,
            daily_target: self.daily_target,
            utilization_pct: self.utilization_pct,
            status,
        })
    }
}

/// CSV-based daily performance repository
#[derive(Clone)]
pub struct DailyRecordRepository {
    connection: CsvConnection,
}

impl DailyRecordRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all daily records in file order
    pub fn load(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError> {
        let rows: Vec<DailyRecordRow> = self.connection.read_rows(RecordKind::DailyPerformance)?;

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| row.into_record(index + 1))
            .collect()
    }

    /// Append one daily record, keeping every existing row
    pub fn append(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError> {
        let mut rows: Vec<DailyRecordRow> = self.connection.read_rows(RecordKind::DailyPerformance)?;
        rows.push(DailyRecordRow::from(record));

        self.connection
            .write_rows(RecordKind::DailyPerformance, &DAILY_RECORD_COLUMNS, &rows)?;

        info!("Stored daily record for {} in CSV, {} rows total", record.date, rows.len());
        Ok(())
    }
}
