use chrono::NaiveDate;
use sqlx::Row;

use super::connection::DbConnection;
use crate::backend::domain::models::ExpenseRecord;
use crate::backend::storage::PersistenceError;

/// Repository for expense rows
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store an expense in the database
    pub async fn store_expense(&self, expense: &ExpenseRecord) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (date, label, amount)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(expense.date)
        .bind(&expense.label)
        .bind(expense.amount)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// All expenses ordered by date, ties in insertion order
    pub async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, PersistenceError> {
        let rows = sqlx::query(
            r#"
            SELECT date, label, amount
            FROM expenses
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| -> Result<ExpenseRecord, PersistenceError> {
                Ok(ExpenseRecord {
                    date: row.try_get::<NaiveDate, _>("date")?,
                    label: row.try_get("label")?,
                    amount: row.try_get("amount")?,
                })
            })
            .collect()
    }
}
