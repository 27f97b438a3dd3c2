//! # REST API Interface Layer
//!
//! HTTP endpoints for MotoFlow. Handlers translate the `shared` DTOs into
//! domain commands, call the services held in [`AppState`](crate::backend::AppState)
//! and map the results back. Domain errors become [`ApiError`] responses:
//! 400 for rejected input, 500 for storage and export failures.
//!
//! ## Routes (all under `/api`)
//!
//! - `GET|PUT /config`
//! - `GET|POST /expenses`
//! - `GET /dashboard`
//! - `POST /daily-records`
//! - `GET /report`, `GET /report/export`, `POST /report/export/to-path`

pub mod config_apis;
pub mod daily_record_apis;
pub mod dashboard_apis;
pub mod error;
pub mod expense_apis;
pub mod mappers;
pub mod report_apis;

pub use error::{ApiError, ApiResult};
