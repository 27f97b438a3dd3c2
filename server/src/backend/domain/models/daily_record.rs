use chrono::NaiveDate;
use shared::PerformanceStatus;

/// One day of courier activity together with the metrics derived when it was
/// recorded.
///
/// `earnings_computed` captures the ride value in effect at entry time; later
/// configuration changes never rewrite stored records.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPerformanceRecord {
    pub date: NaiveDate,
    pub rides_completed: u32,
    pub earnings_computed: f64,
    pub earnings_actual: f64,
    pub daily_target: f64,
    /// Rounded to one decimal place
    pub utilization_pct: f64,
    pub status: PerformanceStatus,
}

/// Canonical column names of the daily performance table, in order
pub const DAILY_RECORD_COLUMNS: [&str; 7] = [
    "date",
    "rides_completed",
    "earnings_computed",
    "earnings_actual",
    "daily_target",
    "utilization_pct",
    "status",
];

/// Canonical column names of the expense table, in order
pub const EXPENSE_COLUMNS: [&str; 3] = ["date", "label", "amount"];
