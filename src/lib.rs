//! # expense-splitter
//!
//! Shared-expense tracker for two people.
//!
//! Keeps an append-only list of who paid for what, totals the spend per
//! payee, and works out how much the lighter spender owes to even things out.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: payees, the roster, expense records
//! - **aggregation** — Per-payee totals and two-payee settlement
//! - **service** — Item service trait with in-memory and JSON file backends
//! - **tracker** — View-model over the list, plus the add-expense form
//! - **simulation** — Random expense histories for demos and benches
//! - **config** — Store location and roster configuration

pub mod aggregation;
pub mod config;
pub mod core;
pub mod service;
pub mod simulation;
pub mod tracker;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::aggregation::settlement::{Settlement, SettlementEngine};
    pub use crate::aggregation::totals::{total_by_payee, PayeeTotals};
    pub use crate::core::expense::{ExpenseId, ExpenseList, ExpenseRecord, NewExpense};
    pub use crate::core::payee::{PayeeName, Roster};
    pub use crate::service::{ItemService, ServiceError};
    pub use crate::tracker::form::ExpenseForm;
    pub use crate::tracker::{ExpenseTracker, LoadState};
}
