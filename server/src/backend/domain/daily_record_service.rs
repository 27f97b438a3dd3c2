//! Daily performance domain logic for MotoFlow.
//!
//! A submission runs one compute-then-persist cycle: validate the input, load
//! the expenses, derive the planning targets with the configuration passed in,
//! evaluate the day and append the resulting record. Stored records are never
//! recomputed when the configuration later changes.

use chrono::{Local, NaiveDate};
use log::{debug, error, info};
use shared::{PlanningConfig, TargetBasis};
use std::sync::Arc;

use crate::backend::domain::commands::daily::{RecordDayCommand, RecordDayResult, ReportResult, TargetVsActual};
use crate::backend::domain::error::DomainResult;
use crate::backend::domain::metrics::{self, PlanningSummary};
use crate::backend::domain::models::DailyPerformanceRecord;
use crate::backend::domain::validation::InputValidator;
use crate::backend::storage::RecordStore;

#[derive(Clone)]
pub struct DailyRecordService {
    store: Arc<dyn RecordStore>,
    validator: InputValidator,
    target_basis: TargetBasis,
}

impl DailyRecordService {
    pub fn new(store: Arc<dyn RecordStore>, target_basis: TargetBasis) -> Self {
        Self {
            store,
            validator: InputValidator::new(),
            target_basis,
        }
    }

    pub fn target_basis(&self) -> TargetBasis {
        self.target_basis
    }

    /// Record a day of work dated today unless a date is given
    pub async fn record_day(&self, command: RecordDayCommand, config: PlanningConfig) -> DomainResult<RecordDayResult> {
        self.record_day_as_of(command, config, Local::now().date_naive()).await
    }

    /// Same as [`DailyRecordService::record_day`] with an explicit "today"
    pub async fn record_day_as_of(
        &self,
        command: RecordDayCommand,
        config: PlanningConfig,
        today: NaiveDate,
    ) -> DomainResult<RecordDayResult> {
        let day = self.validator.validate_day(&command, today)?;

        let expenses = self.store.load_expenses().await?;
        let summary = PlanningSummary::compute(&expenses, &config);
        debug!(
            "Targets for {}: monetary {:.2}, rides {:.2} ({} expenses)",
            day.date,
            summary.daily_monetary_target,
            summary.daily_ride_target,
            expenses.len()
        );

        let evaluation = metrics::evaluate_day(
            day.rides_completed,
            day.earnings_actual,
            &summary,
            &config,
            self.target_basis,
        );

        let record = DailyPerformanceRecord {
            date: day.date,
            rides_completed: day.rides_completed,
            earnings_computed: evaluation.earnings_computed,
            earnings_actual: day.earnings_actual,
            daily_target: evaluation.daily_target,
            utilization_pct: evaluation.utilization.rounded(),
            status: evaluation.status,
        };

        if let Err(e) = self.store.append_daily_record(&record).await {
            error!("Failed to save daily record for {}: {}", record.date, e);
            return Err(e.into());
        }

        info!(
            "Saved daily record for {}: {} rides, target {:.2} ({}), utilization {}% -> {}",
            record.date,
            record.rides_completed,
            record.daily_target,
            self.target_basis,
            record.utilization_pct,
            record.status
        );

        Ok(RecordDayResult {
            record,
            success_message: "Daily record saved".to_string(),
        })
    }

    /// Performance table in store order with totals and the chart series
    pub async fn report(&self) -> DomainResult<ReportResult> {
        let records = self.store.load_daily_records().await?;

        let total_earnings_computed = records.iter().map(|r| r.earnings_computed).sum();
        let total_earnings_actual = records.iter().map(|r| r.earnings_actual).sum();
        let chart = records
            .iter()
            .map(|r| TargetVsActual {
                date: r.date,
                daily_target: r.daily_target,
                earnings_actual: r.earnings_actual,
            })
            .collect();

        Ok(ReportResult {
            records,
            total_earnings_computed,
            total_earnings_actual,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::error::DomainError;
    use crate::backend::domain::models::ExpenseRecord;
    use crate::backend::storage::{MemoryRecordStore, RecordKind};
    use shared::PerformanceStatus;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    async fn create_test_service(basis: TargetBasis, expenses: &[f64]) -> (DailyRecordService, MemoryRecordStore) {
        let store = MemoryRecordStore::new();
        for amount in expenses {
            store
                .append_expense(&ExpenseRecord::new(march(1), "expense", *amount))
                .await
                .unwrap();
        }
        (DailyRecordService::new(Arc::new(store.clone()), basis), store)
    }

    fn command(rides_completed: i64, earnings_actual: f64) -> RecordDayCommand {
        RecordDayCommand {
            date: Some("2024-03-02".to_string()),
            rides_completed,
            earnings_actual,
        }
    }

    #[tokio::test]
    async fn test_record_day_against_monetary_target() {
        let (service, store) = create_test_service(TargetBasis::Monetary, &[900.0]).await;

        let result = service
            .record_day_as_of(command(10, 70.0), PlanningConfig::default(), march(15))
            .await
            .unwrap();

        let record = result.record;
        assert_eq!(record.date, march(2));
        assert_eq!(record.earnings_computed, 70.0);
        assert_eq!(record.daily_target, 30.0);
        assert_eq!(record.utilization_pct, 233.3);
        assert_eq!(record.status, PerformanceStatus::AboveTarget);
        assert_eq!(result.success_message, "Daily record saved");
        assert_eq!(store.load_daily_records().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_record_day_against_ride_target() {
        let (service, _store) = create_test_service(TargetBasis::Rides, &[900.0]).await;

        let record = service
            .record_day_as_of(command(4, 28.0), PlanningConfig::default(), march(15))
            .await
            .unwrap()
            .record;

        // 900 / 7 / 30 = 4.2857 rides a day
        assert!((record.daily_target - 4.285714285714286).abs() < 1e-9);
        assert_eq!(record.utilization_pct, 93.3);
        assert_eq!(record.status, PerformanceStatus::BelowTarget);
    }

    #[tokio::test]
    async fn test_record_day_against_day_earnings() {
        let (service, _store) = create_test_service(TargetBasis::DayEarnings, &[900.0]).await;

        let record = service
            .record_day_as_of(command(10, 63.0), PlanningConfig::default(), march(15))
            .await
            .unwrap()
            .record;

        assert_eq!(record.daily_target, 70.0);
        assert_eq!(record.utilization_pct, 90.0);
        assert_eq!(record.status, PerformanceStatus::BelowTarget);
    }

    #[tokio::test]
    async fn test_no_expenses_means_zero_target() {
        let (service, _store) = create_test_service(TargetBasis::Monetary, &[]).await;

        let record = service
            .record_day_as_of(command(0, 0.0), PlanningConfig::default(), march(15))
            .await
            .unwrap()
            .record;

        assert_eq!(record.daily_target, 0.0);
        assert_eq!(record.utilization_pct, 0.0);
        assert_eq!(record.status, PerformanceStatus::AboveTarget);
    }

    #[tokio::test]
    async fn test_config_in_effect_is_frozen_into_record() {
        let (service, _store) = create_test_service(TargetBasis::Monetary, &[900.0]).await;

        service
            .record_day_as_of(command(10, 70.0), PlanningConfig::default(), march(15))
            .await
            .unwrap();
        service
            .record_day_as_of(
                command(10, 70.0),
                PlanningConfig { ride_value: 10.0, work_days: 20 },
                march(15),
            )
            .await
            .unwrap();

        let report = service.report().await.unwrap();
        assert_eq!(report.records[0].earnings_computed, 70.0);
        assert_eq!(report.records[0].daily_target, 30.0);
        assert_eq!(report.records[1].earnings_computed, 100.0);
        assert_eq!(report.records[1].daily_target, 45.0);
    }

    #[tokio::test]
    async fn test_invalid_day_is_not_stored() {
        let (service, store) = create_test_service(TargetBasis::Monetary, &[900.0]).await;

        let err = service
            .record_day_as_of(command(-1, 10_000.5), PlanningConfig::default(), march(15))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref errors) if errors.len() == 2));
        assert_eq!(store.count(RecordKind::DailyPerformance).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_report_totals_and_chart() {
        let (service, _store) = create_test_service(TargetBasis::Monetary, &[900.0]).await;

        for (rides, actual) in [(10, 72.5), (3, 20.0)] {
            service
                .record_day_as_of(command(rides, actual), PlanningConfig::default(), march(15))
                .await
                .unwrap();
        }

        let report = service.report().await.unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.total_earnings_computed, 91.0);
        assert_eq!(report.total_earnings_actual, 92.5);
        assert_eq!(
            report.chart[1],
            TargetVsActual {
                date: march(2),
                daily_target: 30.0,
                earnings_actual: 20.0,
            }
        );
    }

    #[tokio::test]
    async fn test_report_empty() {
        let (service, _store) = create_test_service(TargetBasis::Monetary, &[]).await;

        let report = service.report().await.unwrap();
        assert!(report.records.is_empty());
        assert!(report.chart.is_empty());
        assert_eq!(report.total_earnings_actual, 0.0);
    }
}
