/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use chrono::NaiveDate;
use shared::PerformanceStatus;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;
use crate::backend::domain::models::{DailyPerformanceRecord, ExpenseRecord};

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }
}

/// Expense dated in March 2024
pub fn sample_expense(day: u32, label: &str, amount: f64) -> ExpenseRecord {
    ExpenseRecord::new(march(day), label, amount)
}

/// Daily record dated in March 2024 at a ride value of 7 and a target of 30
pub fn sample_daily_record(
    day: u32,
    rides_completed: u32,
    earnings_actual: f64,
    status: PerformanceStatus,
) -> DailyPerformanceRecord {
    DailyPerformanceRecord {
        date: march(day),
        rides_completed,
        earnings_computed: f64::from(rides_completed) * 7.0,
        earnings_actual,
        daily_target: 30.0,
        utilization_pct: (earnings_actual / 30.0 * 1000.0).round() / 10.0,
        status,
    }
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).expect("valid March date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());

            std::fs::write(base_path.join("test_file.txt"), "test data")?;
            assert!(base_path.join("test_file.txt").exists());
        }

        // Verify directory was cleaned up
        assert!(!base_path.exists());
        Ok(())
    }
}
