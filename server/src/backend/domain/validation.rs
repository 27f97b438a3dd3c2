//! Input validation for everything a user can submit.
//!
//! Values are checked against configured numeric ranges at this boundary,
//! before they reach the metrics functions. All failures of one submission
//! are collected so the client can re-prompt for every bad field at once.

use chrono::NaiveDate;
use shared::{PlanningConfig, MAX_RIDE_VALUE, MAX_WORK_DAYS, MIN_RIDE_VALUE, MIN_WORK_DAYS};

use crate::backend::domain::commands::daily::RecordDayCommand;
use crate::backend::domain::commands::expenses::AddExpenseCommand;
use crate::backend::domain::models::ExpenseRecord;

/// A single rejected input value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Ride value must be between {min} and {max}, got {value}")]
    RideValueOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Work days must be between {min} and {max}, got {value}")]
    WorkDaysOutOfRange { value: i64, min: u32, max: u32 },
    #[error("Expense label cannot be empty")]
    EmptyLabel,
    #[error("Expense label is too long ({length} characters). Maximum is {max}.")]
    LabelTooLong { length: usize, max: usize },
    #[error("Expense amount must be between 0 and {max}, got {value}")]
    ExpenseAmountOutOfRange { value: f64, max: f64 },
    #[error("Rides completed must be between 0 and {max}, got {value}")]
    RidesOutOfRange { value: i64, max: u32 },
    #[error("Actual earnings must be between 0 and {max}, got {value}")]
    EarningsOutOfRange { value: f64, max: f64 },
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Bounds applied to submitted entries
#[derive(Debug, Clone, PartialEq)]
pub struct InputLimits {
    pub max_label_length: usize,
    pub max_expense_amount: f64,
    pub max_rides_per_day: u32,
    pub max_daily_earnings: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_label_length: 256,
            max_expense_amount: 10_000.0,
            max_rides_per_day: 300,
            max_daily_earnings: 10_000.0,
        }
    }
}

/// A day submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDay {
    pub date: NaiveDate,
    pub rides_completed: u32,
    pub earnings_actual: f64,
}

#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    limits: InputLimits,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a planning configuration against its allowed ranges
    pub fn validate_planning_config(
        &self,
        ride_value: f64,
        work_days: i64,
    ) -> Result<PlanningConfig, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(MIN_RIDE_VALUE..=MAX_RIDE_VALUE).contains(&ride_value) {
            errors.push(ValidationError::RideValueOutOfRange {
                value: ride_value,
                min: MIN_RIDE_VALUE,
                max: MAX_RIDE_VALUE,
            });
        }

        let work_days = match u32::try_from(work_days) {
            Ok(days) if (MIN_WORK_DAYS..=MAX_WORK_DAYS).contains(&days) => Some(days),
            _ => {
                errors.push(ValidationError::WorkDaysOutOfRange {
                    value: work_days,
                    min: MIN_WORK_DAYS,
                    max: MAX_WORK_DAYS,
                });
                None
            }
        };

        match work_days {
            Some(work_days) if errors.is_empty() => Ok(PlanningConfig { ride_value, work_days }),
            _ => Err(errors),
        }
    }

    /// Validate an expense submission and build the record to append
    pub fn validate_expense(
        &self,
        command: &AddExpenseCommand,
        today: NaiveDate,
    ) -> Result<ExpenseRecord, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let label = command.label.trim();
        if label.is_empty() {
            errors.push(ValidationError::EmptyLabel);
        } else if label.chars().count() > self.limits.max_label_length {
            errors.push(ValidationError::LabelTooLong {
                length: label.chars().count(),
                max: self.limits.max_label_length,
            });
        }

        if !(0.0..=self.limits.max_expense_amount).contains(&command.amount) {
            errors.push(ValidationError::ExpenseAmountOutOfRange {
                value: command.amount,
                max: self.limits.max_expense_amount,
            });
        }

        let date = match parse_entry_date(command.date.as_deref(), today) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match date {
            Some(date) if errors.is_empty() => Ok(ExpenseRecord::new(date, label, command.amount)),
            _ => Err(errors),
        }
    }

    /// Validate a daily activity submission
    pub fn validate_day(
        &self,
        command: &RecordDayCommand,
        today: NaiveDate,
    ) -> Result<ValidatedDay, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let rides_completed = match u32::try_from(command.rides_completed) {
            Ok(rides) if rides <= self.limits.max_rides_per_day => Some(rides),
            _ => {
                errors.push(ValidationError::RidesOutOfRange {
                    value: command.rides_completed,
                    max: self.limits.max_rides_per_day,
                });
                None
            }
        };

        if !(0.0..=self.limits.max_daily_earnings).contains(&command.earnings_actual) {
            errors.push(ValidationError::EarningsOutOfRange {
                value: command.earnings_actual,
                max: self.limits.max_daily_earnings,
            });
        }

        let date = match parse_entry_date(command.date.as_deref(), today) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (date, rides_completed) {
            (Some(date), Some(rides_completed)) if errors.is_empty() => Ok(ValidatedDay {
                date,
                rides_completed,
                earnings_actual: command.earnings_actual,
            }),
            _ => Err(errors),
        }
    }
}

/// Parse an optional `YYYY-MM-DD` date, defaulting to `today`
pub fn parse_entry_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    match date.map(str::trim) {
        None | Some("") => Ok(today),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn expense_command(label: &str, amount: f64, date: Option<&str>) -> AddExpenseCommand {
        AddExpenseCommand {
            date: date.map(str::to_string),
            label: label.to_string(),
            amount,
        }
    }

    fn day_command(rides_completed: i64, earnings_actual: f64) -> RecordDayCommand {
        RecordDayCommand {
            date: None,
            rides_completed,
            earnings_actual,
        }
    }

    #[test]
    fn test_planning_config_bounds() {
        let validator = InputValidator::new();

        assert_eq!(
            validator.validate_planning_config(7.0, 30),
            Ok(PlanningConfig { ride_value: 7.0, work_days: 30 })
        );
        assert!(validator.validate_planning_config(1.0, 1).is_ok());
        assert!(validator.validate_planning_config(50.0, 31).is_ok());

        let errors = validator.validate_planning_config(0.5, 32).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::RideValueOutOfRange { .. }));
        assert!(matches!(errors[1], ValidationError::WorkDaysOutOfRange { value: 32, .. }));

        assert!(validator.validate_planning_config(7.0, -1).is_err());
        assert!(validator.validate_planning_config(f64::NAN, 30).is_err());
    }

    #[test]
    fn test_expense_trims_label_and_defaults_date() {
        let validator = InputValidator::new();

        let record = validator
            .validate_expense(&expense_command("  Fuel  ", 120.0, None), today())
            .unwrap();

        assert_eq!(record.label, "Fuel");
        assert_eq!(record.amount, 120.0);
        assert_eq!(record.date, today());
    }

    #[test]
    fn test_expense_explicit_date() {
        let validator = InputValidator::new();

        let record = validator
            .validate_expense(&expense_command("Rent", 500.0, Some("2024-02-01")), today())
            .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_expense_rejections_are_collected() {
        let validator = InputValidator::new();

        let errors = validator
            .validate_expense(&expense_command("   ", -5.0, Some("15/03/2024")), today())
            .unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyLabel,
                ValidationError::ExpenseAmountOutOfRange { value: -5.0, max: 10_000.0 },
                ValidationError::InvalidDate("15/03/2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_expense_label_too_long() {
        let validator = InputValidator::new();
        let label = "x".repeat(257);

        let errors = validator
            .validate_expense(&expense_command(&label, 10.0, None), today())
            .unwrap_err();

        assert_eq!(errors, vec![ValidationError::LabelTooLong { length: 257, max: 256 }]);
    }

    #[test]
    fn test_zero_expense_is_allowed() {
        let validator = InputValidator::new();
        assert!(validator.validate_expense(&expense_command("Free wash", 0.0, None), today()).is_ok());
    }

    #[test]
    fn test_day_bounds() {
        let validator = InputValidator::new();

        let day = validator.validate_day(&day_command(10, 70.0), today()).unwrap();
        assert_eq!(day.rides_completed, 10);
        assert_eq!(day.earnings_actual, 70.0);
        assert_eq!(day.date, today());

        assert!(validator.validate_day(&day_command(0, 0.0), today()).is_ok());
        assert!(validator.validate_day(&day_command(300, 10_000.0), today()).is_ok());

        let errors = validator.validate_day(&day_command(-1, 10_000.5), today()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::RidesOutOfRange { value: -1, .. }));
        assert!(matches!(errors[1], ValidationError::EarningsOutOfRange { .. }));

        assert!(validator.validate_day(&day_command(301, 10.0), today()).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::EmptyLabel.to_string(), "Expense label cannot be empty");
        assert!(ValidationError::LabelTooLong { length: 300, max: 256 }
            .to_string()
            .contains("too long"));
        assert!(ValidationError::InvalidDate("nope".to_string()).to_string().contains("YYYY-MM-DD"));
    }
}
