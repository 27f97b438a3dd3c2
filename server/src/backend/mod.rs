//! # Backend Module
//!
//! Contains all non-UI logic for MotoFlow.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: planning formulas, validation and the services built on them
//! - **Storage**: the `RecordStore` backends (CSV, SQLite, memory)
//! - **IO**: the REST API exposed to clients
//!
//! ## Architecture
//!
//! ```text
//! Client (any UI)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (metrics, validation, services)
//!     ↓
//! Storage Layer (RecordStore backends)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{info, warn};
use shared::{PlanningConfig, TargetBasis};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::domain::{
    DailyRecordService, DashboardService, ExpenseService, ExportService, MoneyFormatter, PlanningConfigService,
};
use crate::backend::storage::RecordStore;
use crate::config::Settings;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub config_service: PlanningConfigService,
    pub expense_service: ExpenseService,
    pub daily_record_service: DailyRecordService,
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
    pub formatter: MoneyFormatter,
}

/// Wire every service to one record store
pub fn build_app_state(
    store: Arc<dyn RecordStore>,
    planning: PlanningConfig,
    target_basis: TargetBasis,
    currency_symbol: &str,
) -> AppState {
    AppState {
        config_service: PlanningConfigService::new(planning),
        expense_service: ExpenseService::new(store.clone()),
        daily_record_service: DailyRecordService::new(store.clone(), target_basis),
        dashboard_service: DashboardService::new(store.clone()),
        export_service: ExportService::new(store),
        formatter: MoneyFormatter::new(currency_symbol),
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(settings: &Settings) -> Result<AppState> {
    info!("Setting up {} storage", settings.storage.backend);
    let store = storage::open_record_store(&settings.storage)
        .await
        .context("Failed to open record store")?;

    info!(
        "Setting up domain model (ride_value={}, work_days={}, target basis {})",
        settings.planning.ride_value, settings.planning.work_days, settings.target_basis
    );
    Ok(build_app_state(
        store,
        settings.planning,
        settings.target_basis,
        &settings.currency_symbol,
    ))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);
    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            warn!("Invalid allowed origin '{}', allowing any origin", allowed_origin);
            cors.allow_origin(Any)
        }
    };

    // Set up our application routes
    let api_routes = Router::new()
        .nest("/config", io::config_apis::router())
        .nest("/expenses", io::expense_apis::router())
        .nest("/dashboard", io::dashboard_apis::router())
        .nest("/daily-records", io::daily_record_apis::router())
        .nest("/report", io::report_apis::router());

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
