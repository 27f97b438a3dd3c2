//! Goal and performance metrics for the courier dashboard.
//!
//! Every function here is pure: configuration is passed in explicitly and
//! nothing is read from process state. The numbers produced feed both the
//! dashboard summary and each new daily performance record.
//!
//! ## Zero denominators
//!
//! A missing denominator (ride value or work days of zero, a zero target)
//! means "no target", not an error. Every division returns `0.0` in that
//! case.

use shared::{PerformanceStatus, PlanningConfig, TargetBasis};

use crate::backend::domain::models::ExpenseRecord;

/// Sum of all expense amounts, `0.0` for an empty slice
pub fn total_expenses(expenses: &[ExpenseRecord]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Rides at `ride_value` needed to cover `total_expenses`
pub fn break_even_rides(total_expenses: f64, ride_value: f64) -> f64 {
    if ride_value > 0.0 {
        total_expenses / ride_value
    } else {
        0.0
    }
}

/// Per-day share of the break-even ride count
pub fn daily_ride_target(break_even_rides: f64, work_days: u32) -> f64 {
    if work_days > 0 {
        break_even_rides / f64::from(work_days)
    } else {
        0.0
    }
}

/// Per-day share of total expenses.
///
/// Derived straight from the expenses rather than from the ride target, so
/// the two framings may differ in the last digits.
pub fn daily_monetary_target(total_expenses: f64, work_days: u32) -> f64 {
    if work_days > 0 {
        total_expenses / f64::from(work_days)
    } else {
        0.0
    }
}

/// Earnings implied by a ride count at the given ride value
pub fn compute_earnings(rides_completed: u32, ride_value: f64) -> f64 {
    f64::from(rides_completed) * ride_value
}

/// Actual performance as a percentage of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization(f64);

impl Utilization {
    /// Unrounded percentage, for further computation
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Percentage rounded to one decimal, as displayed and stored
    pub fn rounded(self) -> f64 {
        round_to(self.0, 1)
    }
}

/// `(numerator / target) * 100`, or zero when there is no target.
///
/// The numerator is either actual earnings (against the monetary target) or
/// actual rides (against the ride target); callers keep the pairing
/// consistent within one record.
pub fn utilization_pct(numerator: f64, target: f64) -> Utilization {
    if target > 0.0 {
        Utilization((numerator / target) * 100.0)
    } else {
        Utilization(0.0)
    }
}

/// Ties resolve to `AboveTarget`
pub fn status(actual: f64, target: f64) -> PerformanceStatus {
    if actual >= target {
        PerformanceStatus::AboveTarget
    } else {
        PerformanceStatus::BelowTarget
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Planning figures derived from the accumulated expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningSummary {
    pub total_expenses: f64,
    pub break_even_rides: f64,
    pub daily_ride_target: f64,
    pub daily_monetary_target: f64,
}

impl PlanningSummary {
    pub fn compute(expenses: &[ExpenseRecord], config: &PlanningConfig) -> Self {
        let total = total_expenses(expenses);
        let break_even = break_even_rides(total, config.ride_value);
        Self {
            total_expenses: total,
            break_even_rides: break_even,
            daily_ride_target: daily_ride_target(break_even, config.work_days),
            daily_monetary_target: daily_monetary_target(total, config.work_days),
        }
    }
}

/// Derived fields of a single day's submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvaluation {
    pub earnings_computed: f64,
    pub daily_target: f64,
    pub utilization: Utilization,
    pub status: PerformanceStatus,
}

/// Evaluate one day against the target selected by `basis`.
///
/// `TargetBasis::DayEarnings` compares actual earnings against the same
/// day's computed earnings.
pub fn evaluate_day(
    rides_completed: u32,
    earnings_actual: f64,
    summary: &PlanningSummary,
    config: &PlanningConfig,
    basis: TargetBasis,
) -> DayEvaluation {
    let earnings_computed = compute_earnings(rides_completed, config.ride_value);

    let (actual, target) = match basis {
        TargetBasis::Monetary => (earnings_actual, summary.daily_monetary_target),
        TargetBasis::Rides => (f64::from(rides_completed), summary.daily_ride_target),
        TargetBasis::DayEarnings => (earnings_actual, earnings_computed),
    };

    DayEvaluation {
        earnings_computed,
        daily_target: target,
        utilization: utilization_pct(actual, target),
        status: status(actual, target),
    }
}
