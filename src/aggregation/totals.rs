use crate::core::expense::ExpenseRecord;
use crate::core::payee::PayeeName;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sum of `price` over every record paid by `name`.
///
/// Returns zero when nothing matches.
pub fn total_by_payee<'a, I>(records: I, name: &PayeeName) -> Decimal
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records
        .into_iter()
        .filter(|r| r.payee_name() == name)
        .map(|r| r.price())
        .sum()
}

/// Amount paid by each payee that appears in a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeTotals {
    totals: BTreeMap<PayeeName, Decimal>,
}

impl PayeeTotals {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut totals: BTreeMap<PayeeName, Decimal> = BTreeMap::new();
        for record in records {
            *totals
                .entry(record.payee_name().clone())
                .or_insert(Decimal::ZERO) += record.price();
        }
        Self { totals }
    }

    /// Total paid by `name`, zero if they paid nothing.
    pub fn get(&self, name: &PayeeName) -> Decimal {
        self.totals.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn grand_total(&self) -> Decimal {
        self.totals.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PayeeName, &Decimal)> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl std::fmt::Display for PayeeTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Totals by Payee ===")?;
        for (payee, amount) in &self.totals {
            writeln!(f, "  {:<12} {}", payee, amount)?;
        }
        writeln!(f, "  {:<12} {}", "Total", self.grand_total())
    }
}
