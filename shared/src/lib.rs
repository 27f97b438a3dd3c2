use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted monetary value of one ride
pub const MIN_RIDE_VALUE: f64 = 1.0;
/// Largest accepted monetary value of one ride
pub const MAX_RIDE_VALUE: f64 = 50.0;
/// Fewest working days accepted for a planning period
pub const MIN_WORK_DAYS: u32 = 1;
/// Most working days accepted for a planning period
pub const MAX_WORK_DAYS: u32 = 31;

/// Planning inputs every metric is computed from.
///
/// Lives in process memory only. Each computation receives a copy of the
/// value in effect when the request arrived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Monetary value attributed to one ride
    pub ride_value: f64,
    /// Working days in the planning period (month)
    pub work_days: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            ride_value: 7.0,
            work_days: 30,
        }
    }
}

/// Which target/numerator pairing a new daily record is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBasis {
    /// Actual earnings against total expenses / work days
    #[default]
    Monetary,
    /// Rides completed against break-even rides / work days
    Rides,
    /// Actual earnings against the same day's computed earnings
    DayEarnings,
}

impl fmt::Display for TargetBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TargetBasis::Monetary => "monetary",
            TargetBasis::Rides => "rides",
            TargetBasis::DayEarnings => "day_earnings",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TargetBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monetary" => Ok(TargetBasis::Monetary),
            "rides" => Ok(TargetBasis::Rides),
            "day_earnings" => Ok(TargetBasis::DayEarnings),
            other => Err(format!("Unknown target basis: {}", other)),
        }
    }
}

/// Whether a day met its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    AboveTarget,
    BelowTarget,
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceStatus::AboveTarget => write!(f, "above_target"),
            PerformanceStatus::BelowTarget => write!(f, "below_target"),
        }
    }
}

impl FromStr for PerformanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "above_target" => Ok(PerformanceStatus::AboveTarget),
            "below_target" => Ok(PerformanceStatus::BelowTarget),
            other => Err(format!("Unknown performance status: {}", other)),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date: String,
    pub label: String,
    pub amount: f64,
}

/// Request for adding an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    pub date: Option<String>,
    pub label: String,
    pub amount: f64,
}

/// Response after adding an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseResponse {
    pub expense: Expense,
    pub success_message: String,
}

/// Expense table with its running total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    pub total_expenses: f64,
}

/// One day of courier activity with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date: String,
    pub rides_completed: u32,
    pub earnings_computed: f64,
    pub earnings_actual: f64,
    pub daily_target: f64,
    pub utilization_pct: f64,
    pub status: PerformanceStatus,
}

/// Request for recording a day of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDayRequest {
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    pub date: Option<String>,
    pub rides_completed: i64,
    pub earnings_actual: f64,
}

/// Response after recording a day of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDayResponse {
    pub record: DailyRecord,
    pub success_message: String,
}

/// Request for replacing the planning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlanningConfigRequest {
    pub ride_value: f64,
    pub work_days: i64,
}

/// Response carrying the planning configuration in effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfigResponse {
    pub config: PlanningConfig,
    pub target_basis: TargetBasis,
}

/// Dashboard summary: planning figures plus the expense table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub config: PlanningConfig,
    pub total_expenses: f64,
    pub break_even_rides: f64,
    pub daily_ride_target: f64,
    pub daily_monetary_target: f64,
    pub formatted_total_expenses: String,
    pub formatted_break_even_rides: String,
    pub formatted_daily_ride_target: String,
    pub formatted_daily_monetary_target: String,
    pub expenses: Vec<Expense>,
}

/// One bar pair of the "target vs actual earnings" chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetVsActualPoint {
    pub date: String,
    pub daily_target: f64,
    pub earnings_actual: f64,
}

/// Performance report: table, totals and chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub records: Vec<DailyRecord>,
    pub total_earnings_computed: f64,
    pub total_earnings_actual: f64,
    pub formatted_total_earnings_computed: String,
    pub formatted_total_earnings_actual: String,
    pub chart: Vec<TargetVsActualPoint>,
}

/// Request for writing the report CSV to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathRequest {
    /// Target directory - the documents directory is used if not provided
    pub custom_path: Option<String>,
}

/// Response after writing the report CSV to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub record_count: usize,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub details: Vec<String>,
}
