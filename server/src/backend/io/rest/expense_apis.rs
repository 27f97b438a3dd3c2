//! # REST API for Expenses
//!
//! Endpoints for recording expenses and listing the expense table.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use log::info;
use shared::{AddExpenseRequest, AddExpenseResponse, ExpenseListResponse};

use crate::backend::io::rest::error::ApiResult;
use crate::backend::io::rest::mappers::ExpenseMapper;
use crate::backend::AppState;

/// Create a router for expense related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_expenses).post(add_expense))
}

/// List all expenses with their total
pub async fn list_expenses(State(state): State<AppState>) -> ApiResult<Json<ExpenseListResponse>> {
    info!("GET /api/expenses");

    let result = state.expense_service.list_expenses().await?;
    Ok(Json(ExpenseMapper::to_list_response(result)))
}

/// Record a new expense
pub async fn add_expense(
    State(state): State<AppState>,
    Json(request): Json<AddExpenseRequest>,
) -> ApiResult<(StatusCode, Json<AddExpenseResponse>)> {
    info!("POST /api/expenses - request: {:?}", request);

    let command = ExpenseMapper::to_add_command(request);
    let result = state.expense_service.add_expense(command).await?;

    Ok((StatusCode::CREATED, Json(ExpenseMapper::to_add_response(result))))
}

#[cfg(test)]
mod tests {
    use crate::backend::io::rest::test_support::{read_json, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use shared::{AddExpenseResponse, ErrorResponse, ExpenseListResponse};

    #[tokio::test]
    async fn test_add_and_list_expenses() {
        let (app, _state) = test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({ "date": "2024-03-01", "label": "Fuel", "amount": 500.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: AddExpenseResponse = read_json(response).await;
        assert_eq!(created.expense.date, "2024-03-01");
        assert_eq!(created.success_message, "Expense saved");

        send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({ "date": null, "label": "Insurance", "amount": 400.0 })),
        )
        .await;

        let response = send(&app, Method::GET, "/api/expenses", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let listing: ExpenseListResponse = read_json(response).await;
        assert_eq!(listing.expenses.len(), 2);
        assert_eq!(listing.expenses[0].label, "Fuel");
        assert_eq!(listing.total_expenses, 900.0);
    }

    #[tokio::test]
    async fn test_add_expense_with_empty_label() {
        let (app, _state) = test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({ "date": null, "label": "  ", "amount": 10.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.details, vec!["Expense label cannot be empty".to_string()]);
    }
}
