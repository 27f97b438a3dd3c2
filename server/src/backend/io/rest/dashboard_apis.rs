//! # REST API for the Dashboard
//!
//! Planning summary computed from the stored expenses and the configuration
//! in effect.

use axum::{extract::State, response::Json, routing::get, Router};
use log::info;
use shared::DashboardResponse;

use crate::backend::io::rest::error::ApiResult;
use crate::backend::io::rest::mappers::DashboardMapper;
use crate::backend::AppState;

/// Create a router for dashboard related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// Get break-even and daily targets with their display strings
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    info!("GET /api/dashboard");

    let config = state.config_service.current();
    let result = state.dashboard_service.summary(config).await?;

    Ok(Json(DashboardMapper::to_dashboard_response(result, &state.formatter)))
}
