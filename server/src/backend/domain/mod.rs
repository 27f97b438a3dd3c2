//! # Domain Module
//!
//! Business logic for MotoFlow, independent of HTTP and of the storage
//! backend in use.
//!
//! ## Module Organization
//!
//! - **metrics**: pure planning formulas (break-even, daily targets, utilization, status)
//! - **validation**: range and format checks applied before any computation
//! - **expense_service**: recording and listing expenses
//! - **daily_record_service**: the record-a-day cycle and the performance report
//! - **dashboard_service**: planning summary over the stored expenses
//! - **export_service**: CSV export of the performance table
//! - **config_service**: the planning configuration in effect
//! - **formatting**: display strings for amounts and counts
//!
//! ## Business Rules
//!
//! - Every formula receives its planning configuration explicitly
//! - Divisions by a zero target yield 0, never an error
//! - Derived fields are frozen into a daily record when it is stored
//! - Aggregates are computed on read and never stored

pub mod commands;
pub mod config_service;
pub mod daily_record_service;
pub mod dashboard_service;
pub mod error;
pub mod expense_service;
pub mod export_service;
pub mod formatting;
pub mod metrics;
pub mod models;
pub mod validation;

pub use config_service::PlanningConfigService;
pub use daily_record_service::DailyRecordService;
pub use dashboard_service::DashboardService;
pub use error::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use export_service::ExportService;
pub use formatting::MoneyFormatter;
pub use validation::{InputValidator, ValidationError};
