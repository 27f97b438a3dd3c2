//! # REST API for the Performance Report
//!
//! The daily performance table with totals and chart series, plus its CSV
//! export either as a download or written to a directory.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};
use shared::{ExportToPathRequest, ExportToPathResponse, ReportResponse};

use crate::backend::domain::commands::export::ExportToPathCommand;
use crate::backend::domain::DomainError;
use crate::backend::io::rest::error::{ApiError, ApiResult};
use crate::backend::io::rest::mappers::DailyRecordMapper;
use crate::backend::AppState;

/// Create a router for report related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_report))
        .route("/export", get(export_csv))
        .route("/export/to-path", post(export_to_path))
}

/// Get the performance table, totals and target vs actual series
pub async fn get_report(State(state): State<AppState>) -> ApiResult<Json<ReportResponse>> {
    info!("GET /api/report");

    let result = state.daily_record_service.report().await?;
    Ok(Json(DailyRecordMapper::to_report_response(result, &state.formatter)))
}

/// Download the performance table as CSV
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    info!("GET /api/report/export");

    let export = state.export_service.export_report_csv().await?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];

    Ok((headers, export.csv_content))
}

/// Write the performance CSV to a directory (or the default location)
pub async fn export_to_path(
    State(state): State<AppState>,
    Json(request): Json<ExportToPathRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/report/export/to-path - custom_path: {:?}", request.custom_path);

    let command = ExportToPathCommand {
        custom_path: request.custom_path,
    };

    match state.export_service.export_to_path(command).await {
        Ok(result) => Ok((
            StatusCode::OK,
            Json(ExportToPathResponse {
                success: true,
                message: format!("File exported successfully to: {}", result.file_path),
                file_path: result.file_path,
                record_count: result.record_count,
            }),
        )),
        Err(DomainError::Export(message)) => {
            error!("Failed to export to path: {}", message);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExportToPathResponse {
                    success: false,
                    message,
                    file_path: String::new(),
                    record_count: 0,
                }),
            ))
        }
        Err(e) => Err(e.into()),
    }
}
