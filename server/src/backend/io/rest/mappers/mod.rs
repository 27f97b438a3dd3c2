pub mod daily_record_mapper;
pub mod dashboard_mapper;
pub mod expense_mapper;

pub use daily_record_mapper::DailyRecordMapper;
pub use dashboard_mapper::DashboardMapper;
pub use expense_mapper::ExpenseMapper;
