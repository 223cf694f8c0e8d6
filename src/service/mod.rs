//! Item service: where expense records are fetched from and persisted to.

pub mod json_file;
pub mod memory;

use crate::core::expense::{ExpenseError, ExpenseRecord, NewExpense};
use thiserror::Error;

/// Errors raised by an item service backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to access item store: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed item store: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid expense: {0}")]
    Expense(#[from] ExpenseError),
    #[error("item service unavailable: {0}")]
    Unavailable(String),
}

/// Backend holding the authoritative list of expenses.
pub trait ItemService {
    /// Fetch every stored record, in insertion order.
    fn get_items(&self) -> Result<Vec<ExpenseRecord>, ServiceError>;

    /// Persist a new expense and return it with its assigned id.
    fn add_item(&mut self, expense: NewExpense) -> Result<ExpenseRecord, ServiceError>;
}
