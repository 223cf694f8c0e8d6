use crate::core::expense::{ExpenseError, NewExpense};
use crate::core::payee::{Roster, RosterError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder shown in the payee picker before a choice is made.
pub const PAYEE_PLACEHOLDER: &str = "--Select payee --";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("who paid? {0}")]
    UnknownPayee(#[from] RosterError),
    #[error("how much? '{0}' is not a valid amount")]
    InvalidPrice(String),
    #[error("'{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
}

/// Raw values typed into the add-expense form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub payee: String,
    pub product: String,
    pub price: String,
    /// Empty means "today".
    pub date: String,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            payee: PAYEE_PLACEHOLDER.to_string(),
            product: String::new(),
            price: String::new(),
            date: String::new(),
        }
    }
}

impl ExpenseForm {
    /// Turn the typed values into an expense ready to persist.
    pub fn submit(&self, roster: &Roster, today: NaiveDate) -> Result<NewExpense, FormError> {
        let payee = roster.resolve(self.payee.trim())?;

        let price_text = self.price.trim();
        let price = Decimal::from_str(price_text)
            .map_err(|_| FormError::InvalidPrice(price_text.to_string()))?;

        let date_text = self.date.trim();
        let set_date = if date_text.is_empty() {
            today
        } else {
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|_| FormError::InvalidDate(date_text.to_string()))?
        };

        Ok(NewExpense::new(payee, self.product.trim(), price, set_date)?)
    }
}
