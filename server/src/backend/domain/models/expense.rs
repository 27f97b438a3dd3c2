use chrono::NaiveDate;

/// A single recorded expense. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub label: String,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, label: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            label: label.into(),
            amount,
        }
    }
}
