// server/src/backend/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod expenses {
    use crate::backend::domain::models::ExpenseRecord;

    /// Input for recording a new expense.
    #[derive(Debug, Clone)]
    pub struct AddExpenseCommand {
        pub date: Option<String>,
        pub label: String,
        pub amount: f64,
    }

    /// Result of recording an expense.
    #[derive(Debug, Clone)]
    pub struct AddExpenseResult {
        pub expense: ExpenseRecord,
        pub success_message: String,
    }

    /// The expense table in store order with its total.
    #[derive(Debug, Clone)]
    pub struct ExpenseListResult {
        pub expenses: Vec<ExpenseRecord>,
        pub total_expenses: f64,
    }
}

pub mod daily {
    use chrono::NaiveDate;

    use crate::backend::domain::models::DailyPerformanceRecord;

    /// Input for recording one day of activity.
    #[derive(Debug, Clone)]
    pub struct RecordDayCommand {
        pub date: Option<String>,
        pub rides_completed: i64,
        pub earnings_actual: f64,
    }

    /// Result of recording one day of activity.
    #[derive(Debug, Clone)]
    pub struct RecordDayResult {
        pub record: DailyPerformanceRecord,
        pub success_message: String,
    }

    /// One point of the target vs actual earnings series.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TargetVsActual {
        pub date: NaiveDate,
        pub daily_target: f64,
        pub earnings_actual: f64,
    }

    /// Performance table with totals computed on read.
    #[derive(Debug, Clone)]
    pub struct ReportResult {
        pub records: Vec<DailyPerformanceRecord>,
        pub total_earnings_computed: f64,
        pub total_earnings_actual: f64,
        pub chart: Vec<TargetVsActual>,
    }
}

pub mod config {
    /// Input for replacing the planning configuration.
    #[derive(Debug, Clone)]
    pub struct UpdatePlanningConfigCommand {
        pub ride_value: f64,
        pub work_days: i64,
    }
}

pub mod dashboard {
    use shared::PlanningConfig;

    use crate::backend::domain::metrics::PlanningSummary;
    use crate::backend::domain::models::ExpenseRecord;

    /// Everything the dashboard page shows.
    #[derive(Debug, Clone)]
    pub struct DashboardResult {
        pub config: PlanningConfig,
        pub summary: PlanningSummary,
        pub expenses: Vec<ExpenseRecord>,
    }
}

pub mod export {
    /// Serialized report ready for download.
    #[derive(Debug, Clone)]
    pub struct ExportReportResult {
        pub csv_content: String,
        pub filename: String,
        pub record_count: usize,
    }

    /// Input for writing the report to a directory.
    #[derive(Debug, Clone, Default)]
    pub struct ExportToPathCommand {
        pub custom_path: Option<String>,
    }

    /// Result of writing the report to a directory.
    #[derive(Debug, Clone)]
    pub struct ExportToPathResult {
        pub file_path: String,
        pub record_count: usize,
    }
}
