//! Dashboard summary: planning figures recomputed from the stored expenses.
use log::info;
use shared::PlanningConfig;
use std::sync::Arc;

use crate::backend::domain::commands::dashboard::DashboardResult;
use crate::backend::domain::error::DomainResult;
use crate::backend::domain::metrics::PlanningSummary;
use crate::backend::storage::RecordStore;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn RecordStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self, config: PlanningConfig) -> DomainResult<DashboardResult> {
        let expenses = self.store.load_expenses().await?;
        let summary = PlanningSummary::compute(&expenses, &config);

        info!(
            "Dashboard: total expenses {:.2}, break-even {:.1} rides, daily target {:.2} rides / {:.2}",
            summary.total_expenses, summary.break_even_rides, summary.daily_ride_target, summary.daily_monetary_target
        );

        Ok(DashboardResult {
            config,
            summary,
            expenses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::ExpenseRecord;
    use crate::backend::storage::MemoryRecordStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_summary_from_stored_expenses() {
        let store = MemoryRecordStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        store.append_expense(&ExpenseRecord::new(date, "Fuel", 500.0)).await.unwrap();
        store.append_expense(&ExpenseRecord::new(date, "Insurance", 400.0)).await.unwrap();
        let service = DashboardService::new(Arc::new(store));

        let result = service.summary(PlanningConfig::default()).await.unwrap();

        assert_eq!(result.expenses.len(), 2);
        assert_eq!(result.summary.total_expenses, 900.0);
        assert!((result.summary.break_even_rides - 128.571428).abs() < 1e-5);
        assert!((result.summary.daily_ride_target - 4.285714).abs() < 1e-5);
        assert_eq!(result.summary.daily_monetary_target, 30.0);
        assert_eq!(result.config, PlanningConfig::default());
    }

    #[tokio::test]
    async fn test_summary_without_expenses() {
        let service = DashboardService::new(Arc::new(MemoryRecordStore::new()));

        let result = service
            .summary(PlanningConfig { ride_value: 12.0, work_days: 1 })
            .await
            .unwrap();

        assert!(result.expenses.is_empty());
        assert_eq!(result.summary.total_expenses, 0.0);
        assert_eq!(result.summary.break_even_rides, 0.0);
        assert_eq!(result.summary.daily_monetary_target, 0.0);
    }
}
