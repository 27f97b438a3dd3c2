pub mod daily_record;
pub mod expense;

pub use daily_record::{DailyPerformanceRecord, DAILY_RECORD_COLUMNS, EXPENSE_COLUMNS};
pub use expense::ExpenseRecord;
