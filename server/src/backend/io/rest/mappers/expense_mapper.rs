//! server/src/backend/io/rest/mappers/expense_mapper.rs

use crate::backend::domain::commands::expenses::{AddExpenseCommand, AddExpenseResult, ExpenseListResult};
use crate::backend::domain::models::ExpenseRecord;
use shared::{AddExpenseRequest, AddExpenseResponse, Expense, ExpenseListResponse};

/// Mapper to convert between shared Expense DTOs and domain expense types.
pub struct ExpenseMapper;

impl ExpenseMapper {
    /// Converts a domain ExpenseRecord to a shared Expense DTO.
    pub fn to_dto(domain: ExpenseRecord) -> Expense {
        Expense {
            date: domain.date.format("%Y-%m-%d").to_string(),
            label: domain.label,
            amount: domain.amount,
        }
    }

    pub fn to_add_command(request: AddExpenseRequest) -> AddExpenseCommand {
        AddExpenseCommand {
            date: request.date,
            label: request.label,
            amount: request.amount,
        }
    }

    pub fn to_add_response(result: AddExpenseResult) -> AddExpenseResponse {
        AddExpenseResponse {
            expense: Self::to_dto(result.expense),
            success_message: result.success_message,
        }
    }

    pub fn to_list_response(result: ExpenseListResult) -> ExpenseListResponse {
        ExpenseListResponse {
            expenses: result.expenses.into_iter().map(Self::to_dto).collect(),
            total_expenses: result.total_expenses,
        }
    }
}
