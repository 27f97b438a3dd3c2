//! # REST API for the Planning Configuration
//!
//! Endpoints for reading and replacing the ride value and work days in effect.

use axum::{extract::State, response::Json, routing::get, Router};
use log::info;
use shared::{PlanningConfigResponse, UpdatePlanningConfigRequest};

use crate::backend::domain::commands::config::UpdatePlanningConfigCommand;
use crate::backend::io::rest::error::ApiResult;
use crate::backend::AppState;

/// Create a router for configuration related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_config).put(update_config))
}

/// Get the planning configuration in effect
pub async fn get_config(State(state): State<AppState>) -> Json<PlanningConfigResponse> {
    info!("GET /api/config");

    Json(PlanningConfigResponse {
        config: state.config_service.current(),
        target_basis: state.daily_record_service.target_basis(),
    })
}

/// Validate and replace the planning configuration
pub async fn update_config(
    State(state): State<AppState>,
    Json(request): Json<UpdatePlanningConfigRequest>,
) -> ApiResult<Json<PlanningConfigResponse>> {
    info!("PUT /api/config - request: {:?}", request);

    let command = UpdatePlanningConfigCommand {
        ride_value: request.ride_value,
        work_days: request.work_days,
    };
    let config = state.config_service.update(command)?;

    Ok(Json(PlanningConfigResponse {
        config,
        target_basis: state.daily_record_service.target_basis(),
    }))
}
