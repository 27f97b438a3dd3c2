//! Expense service domain logic for MotoFlow.
use chrono::{Local, NaiveDate};
use log::{error, info};
use std::sync::Arc;

use crate::backend::domain::commands::expenses::{AddExpenseCommand, AddExpenseResult, ExpenseListResult};
use crate::backend::domain::error::DomainResult;
use crate::backend::domain::metrics;
use crate::backend::domain::validation::InputValidator;
use crate::backend::storage::RecordStore;

#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn RecordStore>,
    validator: InputValidator,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            validator: InputValidator::new(),
        }
    }

    /// Validate and append an expense dated today unless a date is given
    pub async fn add_expense(&self, command: AddExpenseCommand) -> DomainResult<AddExpenseResult> {
        self.add_expense_as_of(command, Local::now().date_naive()).await
    }

    /// Same as [`ExpenseService::add_expense`] with an explicit "today"
    pub async fn add_expense_as_of(
        &self,
        command: AddExpenseCommand,
        today: NaiveDate,
    ) -> DomainResult<AddExpenseResult> {
        let expense = self.validator.validate_expense(&command, today)?;

        if let Err(e) = self.store.append_expense(&expense).await {
            error!("Failed to save expense '{}': {}", expense.label, e);
            return Err(e.into());
        }

        info!(
            "Saved expense '{}' of {:.2} dated {} ({})",
            expense.label,
            expense.amount,
            expense.date,
            self.store.backend_name()
        );

        Ok(AddExpenseResult {
            expense,
            success_message: "Expense saved".to_string(),
        })
    }

    /// All expenses in store order with their total
    pub async fn list_expenses(&self) -> DomainResult<ExpenseListResult> {
        let expenses = self.store.load_expenses().await?;
        let total_expenses = metrics::total_expenses(&expenses);

        Ok(ExpenseListResult {
            expenses,
            total_expenses,
        })
    }
}
