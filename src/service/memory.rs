use crate::core::expense::{ExpenseId, ExpenseRecord, NewExpense};
use crate::service::{ItemService, ServiceError};

/// Item service that keeps records in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemService {
    items: Vec<ExpenseRecord>,
    fetch_error: Option<String>,
}

impl MemoryItemService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ExpenseRecord>) -> Self {
        Self {
            items,
            fetch_error: None,
        }
    }

    /// A service whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            fetch_error: Some(message.into()),
        }
    }
}

impl ItemService for MemoryItemService {
    fn get_items(&self) -> Result<Vec<ExpenseRecord>, ServiceError> {
        match &self.fetch_error {
            Some(message) => Err(ServiceError::Unavailable(message.clone())),
            None => Ok(self.items.clone()),
        }
    }

    fn add_item(&mut self, expense: NewExpense) -> Result<ExpenseRecord, ServiceError> {
        let record = expense.into_record(ExpenseId::new());
        self.items.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payee::PayeeName;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(price: rust_decimal::Decimal) -> NewExpense {
        NewExpense::new(
            PayeeName::new("Rahul"),
            "Tea",
            price,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut service = MemoryItemService::new();
        let a = service.add_item(expense(dec!(1))).unwrap();
        let b = service.add_item(expense(dec!(2))).unwrap();
        assert_ne!(a.id(), b.id());

        let items = service.get_items().unwrap();
        assert_eq!(items, vec![a, b]);
    }

    #[test]
    fn test_failing_service() {
        let service = MemoryItemService::failing("connection refused");
        let err = service.get_items().unwrap_err();
        assert_eq!(
            err.to_string(),
            "item service unavailable: connection refused"
        );
    }
}
