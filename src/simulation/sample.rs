//! Random expense generation for demos, benches and manual testing.

use crate::core::expense::{ExpenseId, ExpenseList, NewExpense};
use crate::core::payee::Roster;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

const PRODUCTS: &[&str] = &[
    "Groceries",
    "Vegetables",
    "Fruits",
    "Milk",
    "Electricity bill",
    "Internet",
    "Dinner",
    "Cab fare",
    "Cleaning supplies",
    "Water cans",
];

/// Configuration for generating a random expense history.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub roster: Roster,
    /// Number of expenses to generate.
    pub count: usize,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// First date an expense may fall on.
    pub start_date: NaiveDate,
    /// Length of the date window, in days.
    pub days: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            count: 20,
            min_price: Decimal::from(10),
            max_price: Decimal::from(2_000),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            days: 90,
        }
    }
}

/// Generate a random expense history, ordered by date.
pub fn generate_sample_expenses(config: &SampleConfig) -> ExpenseList {
    let mut rng = rand::thread_rng();
    let payees = config.roster.payees();

    let min_f64: f64 = config.min_price.to_string().parse().unwrap_or(10.0);
    let max_f64: f64 = config.max_price.to_string().parse().unwrap_or(2_000.0);

    let mut expenses: Vec<NewExpense> = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let payee = payees[rng.gen_range(0..payees.len())].clone();
        let product = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];

        let price_f64 = if max_f64 > min_f64 {
            rng.gen_range(min_f64..max_f64)
        } else {
            min_f64
        };
        let price = Decimal::from_f64_retain(price_f64)
            .unwrap_or(config.min_price)
            .round_dp(2)
            .max(Decimal::ZERO);

        let offset = rng.gen_range(0..config.days.max(1));
        let set_date = config.start_date + Duration::days(i64::from(offset));

        if let Ok(expense) = NewExpense::new(payee, product, price, set_date) {
            expenses.push(expense);
        }
    }

    expenses.sort_by_key(|e| e.set_date());
    expenses
        .into_iter()
        .map(|e| e.into_record(ExpenseId::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::settlement::SettlementEngine;
    use crate::aggregation::totals::PayeeTotals;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_generation() {
        let config = SampleConfig {
            count: 50,
            ..Default::default()
        };
        let list = generate_sample_expenses(&config);

        assert_eq!(list.len(), 50);
        for record in &list {
            assert!(config.roster.contains(record.payee_name()));
            assert!(record.price() >= config.min_price);
            assert!(record.price() <= config.max_price);
            assert!(record.set_date() >= config.start_date);
        }
        let dates: Vec<_> = list.iter().map(|r| r.set_date()).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sample_settlement_bounded_by_spend() {
        let list = generate_sample_expenses(&SampleConfig::default());
        let settlement = SettlementEngine::settle(&list, &SampleConfig::default().roster);
        let totals = PayeeTotals::from_records(&list);

        assert!(settlement.payable <= totals.grand_total() / dec!(2));
    }

    #[test]
    fn test_fixed_price_range() {
        let config = SampleConfig {
            count: 5,
            min_price: dec!(25),
            max_price: dec!(25),
            ..Default::default()
        };
        let list = generate_sample_expenses(&config);
        assert!(list.iter().all(|r| r.price() == dec!(25)));
    }
}
