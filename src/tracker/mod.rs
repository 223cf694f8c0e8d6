//! Expense tracker view-model.
//!
//! Holds the session's list of expenses, the load state of the initial
//! fetch, and derives the per-payee totals and settlement shown under the
//! expense table.

pub mod form;

use crate::aggregation::settlement::{Settlement, SettlementEngine};
use crate::aggregation::totals::{total_by_payee, PayeeTotals};
use crate::core::expense::{ExpenseList, ExpenseRecord, NewExpense};
use crate::core::payee::{PayeeName, Roster};
use crate::service::{ItemService, ServiceError};
use log::{info, warn};
use rust_decimal::Decimal;

/// Progress of the one-shot initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// The fetch failed; holds the message shown to the user.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    roster: Roster,
    items: ExpenseList,
    state: LoadState,
}

impl ExpenseTracker {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            items: ExpenseList::new(),
            state: LoadState::Loading,
        }
    }

    /// Fetch every record from `service`, once.
    ///
    /// A failure is not returned: it is kept as the tracker's error message.
    pub fn load(&mut self, service: &dyn ItemService) {
        match service.get_items() {
            Ok(items) => {
                info!("loaded {} expenses", items.len());
                self.items = ExpenseList::from(items);
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                warn!("failed to load expenses: {}", e);
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Persist `expense` and append the stored record.
    ///
    /// The list is left untouched if the service rejects the expense.
    pub fn add_expense(
        &mut self,
        service: &mut dyn ItemService,
        expense: NewExpense,
    ) -> Result<ExpenseRecord, ServiceError> {
        let record = service.add_item(expense)?;
        info!("added expense {} for {}", record.id(), record.payee_name());
        self.items.push(record.clone());
        Ok(record)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn items(&self) -> &ExpenseList {
        &self.items
    }

    pub fn total_by_payee(&self, name: &PayeeName) -> Decimal {
        total_by_payee(&self.items, name)
    }

    pub fn totals(&self) -> PayeeTotals {
        PayeeTotals::from_records(&self.items)
    }

    pub fn settlement(&self) -> Settlement {
        SettlementEngine::settle(&self.items, &self.roster)
    }
}

impl std::fmt::Display for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Expense Tracker ===")?;
        match &self.state {
            LoadState::Loading => return writeln!(f, "Loading..."),
            LoadState::Failed(message) => return writeln!(f, "Error: {}", message),
            LoadState::Loaded => {}
        }

        writeln!(
            f,
            "{:>3}  {:<10}  {:<24}  {:<10}  {:>10}",
            "#", "Payee", "Description", "Date", "Amount"
        )?;
        for (idx, item) in self.items.iter().enumerate() {
            writeln!(
                f,
                "{:>3}  {:<10}  {:<24}  {:<10}  {:>10}",
                idx + 1,
                item.payee_name().as_str(),
                item.product(),
                item.set_date().to_string(),
                item.price().to_string()
            )?;
        }

        let settlement = self.settlement();
        for payee in self.roster.payees() {
            let label = format!("{} paid", payee);
            writeln!(
                f,
                "{:>54}  {:>10}",
                label,
                self.total_by_payee(payee).to_string()
            )?;
        }
        writeln!(
            f,
            "{:>54}  {:>10}",
            settlement.message(),
            settlement.payable.to_string()
        )
    }
}
