use chrono::NaiveDate;
use shared::PerformanceStatus;
use sqlx::Row;

use super::connection::DbConnection;
use crate::backend::domain::models::DailyPerformanceRecord;
use crate::backend::storage::{PersistenceError, RecordKind};

/// Repository for daily performance rows
#[derive(Clone)]
pub struct DailyRecordRepository {
    db: DbConnection,
}

impl DailyRecordRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a daily record in the database
    pub async fn store_daily_record(&self, record: &DailyPerformanceRecord) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            INSERT INTO daily_records (
                date, rides_completed, earnings_computed, earnings_actual,
                daily_target, utilization_pct, status
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.date)
        .bind(i64::from(record.rides_completed))
        .bind(record.earnings_computed)
        .bind(record.earnings_actual)
        .bind(record.daily_target)
        .bind(record.utilization_pct)
        .bind(record.status.to_string())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// All daily records ordered by date, ties in insertion order
    pub async fn list_daily_records(&self) -> Result<Vec<DailyPerformanceRecord>, PersistenceError> {
        let rows = sqlx::query(
            r#"
            SELECT date, rides_completed, earnings_computed, earnings_actual,
                   daily_target, utilization_pct, status
            FROM daily_records
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .enumerate()
            .map(|(index, row)| -> Result<DailyPerformanceRecord, PersistenceError> {
                let corrupt = |reason: String| PersistenceError::Corrupt {
                    kind: RecordKind::DailyPerformance,
                    row: index + 1,
                    reason,
                };

                let rides: i64 = row.try_get("rides_completed")?;
                let rides_completed = u32::try_from(rides)
                    .map_err(|_| corrupt(format!("rides_completed out of range: {}", rides)))?;
                let status: String = row.try_get("status")?;
                let status = status.parse::<PerformanceStatus>().map_err(corrupt)?;

                Ok(DailyPerformanceRecord {
                    date: row.try_get::<NaiveDate, _>("date")?,
                    rides_completed,
                    earnings_computed: row.try_get("earnings_computed")?,
                    earnings_actual: row.try_get("earnings_actual")?,
                    daily_target: row.try_get("daily_target")?,
                    utilization_pct: row.try_get("utilization_pct")?,
                    status,
                })
            })
            .collect()
    }
}
