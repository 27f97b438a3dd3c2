use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use shared::ErrorResponse;
use thiserror::Error;

use crate::backend::domain::DomainError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Error returned by REST handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Domain(DomainError::Persistence(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR"),
            ApiError::Domain(DomainError::Export(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        let details = match &self {
            ApiError::Domain(e) => e.details(),
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
