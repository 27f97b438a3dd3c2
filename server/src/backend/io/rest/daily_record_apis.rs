//! # REST API for Daily Records
//!
//! Endpoint for recording a day of rides and earnings. The derived fields are
//! computed with the configuration in effect when the request arrives.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use log::info;
use shared::{RecordDayRequest, RecordDayResponse};

use crate::backend::io::rest::error::ApiResult;
use crate::backend::io::rest::mappers::DailyRecordMapper;
use crate::backend::AppState;

/// Create a router for daily record related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(record_day))
}

/// Record one day of work
pub async fn record_day(
    State(state): State<AppState>,
    Json(request): Json<RecordDayRequest>,
) -> ApiResult<(StatusCode, Json<RecordDayResponse>)> {
    info!("POST /api/daily-records - request: {:?}", request);

    let config = state.config_service.current();
    let command = DailyRecordMapper::to_command(request);
    let result = state.daily_record_service.record_day(command, config).await?;

    Ok((StatusCode::CREATED, Json(DailyRecordMapper::to_record_day_response(result))))
}
