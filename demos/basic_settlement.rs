//! Basic expense tracking and settlement example.
//!
//! Loads a few shared expenses, adds one through the form, and shows
//! who has to pay whom.

use chrono::NaiveDate;
use expense_splitter::core::expense::{ExpenseId, NewExpense};
use expense_splitter::core::payee::{PayeeName, Roster};
use expense_splitter::service::memory::MemoryItemService;
use expense_splitter::tracker::form::ExpenseForm;
use expense_splitter::tracker::ExpenseTracker;
use rust_decimal_macros::dec;

fn main() {
    println!("━━━ Shared flat expenses ━━━\n");

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let seed = vec![
        NewExpense::new(PayeeName::new("Rahul"), "Groceries", dec!(10), date).unwrap(),
        NewExpense::new(PayeeName::new("Ramesh"), "Milk", dec!(4), date).unwrap(),
        NewExpense::new(PayeeName::new("Rahul"), "Vegetables", dec!(6), date).unwrap(),
    ];
    let mut service = MemoryItemService::with_items(
        seed.into_iter()
            .map(|e| e.into_record(ExpenseId::new()))
            .collect(),
    );

    let mut tracker = ExpenseTracker::new(Roster::default());
    tracker.load(&service);
    println!("{}", tracker);

    println!("━━━ Ramesh buys the internet recharge ━━━\n");

    let form = ExpenseForm {
        payee: "Ramesh".to_string(),
        product: "Internet".to_string(),
        price: "20".to_string(),
        date: "2024-03-04".to_string(),
    };
    let expense = form.submit(tracker.roster(), date).unwrap();
    tracker.add_expense(&mut service, expense).unwrap();
    println!("{}", tracker);

    print!("{}", tracker.settlement());
}
