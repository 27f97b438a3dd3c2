//! Export service domain logic for MotoFlow.
//!
//! Serializes the daily performance table as CSV with a header of canonical
//! column names, rows in load order, either for download or written straight
//! into a directory.

use chrono::{Local, NaiveDate};
use csv::WriterBuilder;
use log::{error, info};
use serde::Serialize;
use shared::PerformanceStatus;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::domain::commands::export::{ExportReportResult, ExportToPathCommand, ExportToPathResult};
use crate::backend::domain::error::{DomainError, DomainResult};
use crate::backend::domain::models::{DailyPerformanceRecord, DAILY_RECORD_COLUMNS};
use crate::backend::storage::RecordStore;

/// Attachment name offered for downloads
pub const REPORT_FILENAME: &str = "motoflow_report.csv";

#[derive(Serialize)]
struct ReportRow {
    date: String,
    rides_completed: u32,
    earnings_computed: f64,
    earnings_actual: f64,
    daily_target: f64,
    utilization_pct: f64,
    status: PerformanceStatus,
}

impl From<&DailyPerformanceRecord> for ReportRow {
    fn from(record: &DailyPerformanceRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            rides_completed: record.rides_completed,
            earnings_computed: record.earnings_computed,
            earnings_actual: record.earnings_actual,
            daily_target: record.daily_target,
            utilization_pct: record.utilization_pct,
            status: record.status,
        }
    }
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    store: Arc<dyn RecordStore>,
}

impl ExportService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Serialize the performance table for download
    pub async fn export_report_csv(&self) -> DomainResult<ExportReportResult> {
        let records = self.store.load_daily_records().await?;
        let csv_content = render_csv(&records)?;

        info!(
            "Exported {} daily records ({} bytes)",
            records.len(),
            csv_content.len()
        );

        Ok(ExportReportResult {
            csv_content,
            filename: REPORT_FILENAME.to_string(),
            record_count: records.len(),
        })
    }

    /// Write the report into a directory (default: the user's documents directory)
    pub async fn export_to_path(&self, command: ExportToPathCommand) -> DomainResult<ExportToPathResult> {
        self.export_to_path_as_of(command, Local::now().date_naive()).await
    }

    /// Same as [`ExportService::export_to_path`] with an explicit date for the filename
    pub async fn export_to_path_as_of(
        &self,
        command: ExportToPathCommand,
        today: NaiveDate,
    ) -> DomainResult<ExportToPathResult> {
        info!("Exporting report to path - custom_path: {:?}", command.custom_path);

        let export = self.export_report_csv().await?;
        let export_dir = resolve_export_dir(command.custom_path.as_deref())?;
        let file_path = export_dir.join(format!("motoflow_report_{}.csv", today.format("%Y%m%d")));

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("Failed to create export directory {}: {}", export_dir.display(), e);
            return Err(DomainError::Export(format!(
                "Failed to create export directory {}: {}",
                export_dir.display(),
                e
            )));
        }

        if let Err(e) = fs::write(&file_path, &export.csv_content) {
            error!("Failed to write export file {}: {}", file_path.display(), e);
            return Err(DomainError::Export(format!(
                "Failed to write export file {}: {}",
                file_path.display(),
                e
            )));
        }

        let file_path = file_path.to_string_lossy().to_string();
        info!("Exported {} daily records to {}", export.record_count, file_path);

        Ok(ExportToPathResult {
            file_path,
            record_count: export.record_count,
        })
    }
}

fn render_csv(records: &[DailyPerformanceRecord]) -> DomainResult<String> {
    let export_error = |e: csv::Error| DomainError::Export(format!("Failed to serialize report: {}", e));

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(DAILY_RECORD_COLUMNS).map_err(export_error)?;
    for record in records {
        writer.serialize(ReportRow::from(record)).map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::Export(format!("Failed to flush report: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| DomainError::Export(format!("Report is not valid UTF-8: {}", e)))
}

fn resolve_export_dir(custom_path: Option<&str>) -> DomainResult<PathBuf> {
    match custom_path {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(sanitize_path(path))),
        _ => dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| DomainError::Export("Failed to determine export directory".to_string())),
    }
}

/// Basic path sanitization to handle common user input issues
fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim().to_string();

    // Remove surrounding quotes (single or double)
    if cleaned.len() >= 2
        && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
    {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }

    cleaned = cleaned.replace("\\ ", " ");

    while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
        cleaned.pop();
    }

    if cleaned == "~" || cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
        if let Some(home) = dirs::home_dir() {
            cleaned = if cleaned == "~" {
                home.to_string_lossy().to_string()
            } else {
                home.join(&cleaned[2..]).to_string_lossy().to_string()
            };
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryRecordStore;
    use tempfile::TempDir;

    fn record(day: u32, rides: u32, actual: f64, status: PerformanceStatus) -> DailyPerformanceRecord {
        DailyPerformanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            rides_completed: rides,
            earnings_computed: f64::from(rides) * 7.0,
            earnings_actual: actual,
            daily_target: 30.0,
            utilization_pct: (actual / 30.0 * 1000.0).round() / 10.0,
            status,
        }
    }

    async fn service_with(records: &[DailyPerformanceRecord]) -> ExportService {
        let store = MemoryRecordStore::new();
        for r in records {
            store.append_daily_record(r).await.unwrap();
        }
        ExportService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_export_has_header_and_rows_in_load_order() {
        let service = service_with(&[
            record(5, 10, 70.0, PerformanceStatus::AboveTarget),
            record(1, 2, 14.5, PerformanceStatus::BelowTarget),
        ])
        .await;

        let export = service.export_report_csv().await.unwrap();
        let lines: Vec<&str> = export.csv_content.lines().collect();

        assert_eq!(export.filename, "motoflow_report.csv");
        assert_eq!(export.record_count, 2);
        assert_eq!(
            lines[0],
            "date,rides_completed,earnings_computed,earnings_actual,daily_target,utilization_pct,status"
        );
        assert!(lines[1].starts_with("2024-03-05,10,"));
        assert!(lines[1].ends_with(",above_target"));
        assert!(lines[2].starts_with("2024-03-01,2,"));
        assert!(lines[2].ends_with(",below_target"));
    }

    #[tokio::test]
    async fn test_empty_export_is_header_only() {
        let service = service_with(&[]).await;

        let export = service.export_report_csv().await.unwrap();
        assert_eq!(export.record_count, 0);
        assert_eq!(export.csv_content.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_export_to_custom_path() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("reports");
        let service = service_with(&[record(1, 10, 70.0, PerformanceStatus::AboveTarget)]).await;

        let result = service
            .export_to_path_as_of(
                ExportToPathCommand {
                    custom_path: Some(format!("\"{}/\"", target.display())),
                },
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .await
            .unwrap();

        let expected = target.join("motoflow_report_20240331.csv");
        assert_eq!(result.file_path, expected.to_string_lossy());
        assert_eq!(result.record_count, 1);
        let written = fs::read_to_string(expected).unwrap();
        assert_eq!(written.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_export_to_unwritable_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "in the way").unwrap();
        let service = service_with(&[]).await;

        let err = service
            .export_to_path(ExportToPathCommand {
                custom_path: Some(blocker.join("sub").to_string_lossy().to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Export(_)));
    }

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(sanitize_path("'/path/to/dir'"), "/path/to/dir");
        assert_eq!(sanitize_path("/path\\ to\\ dir"), "/path to dir");
        assert_eq!(sanitize_path("/path/to/dir/"), "/path/to/dir");
        assert_eq!(sanitize_path("/"), "/");

        if let Some(home) = dirs::home_dir() {
            let expected = home.join("Documents").to_string_lossy().to_string();
            assert_eq!(sanitize_path("\"~/Documents\""), expected);
        }
    }
}
