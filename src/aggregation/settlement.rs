use crate::aggregation::totals::total_by_payee;
use crate::core::expense::ExpenseRecord;
use crate::core::payee::{PayeeName, Roster};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who owes whom after splitting shared spend evenly between two payees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The payee who paid less and must pay.
    pub payer: PayeeName,
    /// The payee who paid more and is owed.
    pub receiver: PayeeName,
    /// Amount the payer owes: half the difference in spend.
    pub payable: Decimal,
    /// The roster's first payee.
    pub first: PayeeName,
    pub first_paid: Decimal,
    /// The roster's second payee.
    pub second: PayeeName,
    pub second_paid: Decimal,
}

impl Settlement {
    /// Human-readable instruction, e.g. "Ramesh has to pay".
    pub fn message(&self) -> String {
        format!("{} has to pay", self.payer)
    }

    /// True when both payees already spent the same amount.
    pub fn is_settled(&self) -> bool {
        self.payable == Decimal::ZERO
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement ===")?;
        writeln!(f, "{} paid:  {}", self.first, self.first_paid)?;
        writeln!(f, "{} paid:  {}", self.second, self.second_paid)?;
        writeln!(f, "{}:  {}", self.message(), self.payable)
    }
}

pub struct SettlementEngine;

impl SettlementEngine {
    /// Settle spend between the two roster payees.
    ///
    /// Records paid by anyone outside the roster are ignored. The payee
    /// who paid less owes half the difference; on a tie the second payee
    /// is named with nothing to pay.
    pub fn settle<'a, I>(records: I, roster: &Roster) -> Settlement
    where
        I: IntoIterator<Item = &'a ExpenseRecord> + Clone,
    {
        let first_paid = total_by_payee(records.clone(), roster.first());
        let second_paid = total_by_payee(records, roster.second());

        let payable = (first_paid - second_paid).abs() / Decimal::TWO;
        let (payer, receiver) = if first_paid < second_paid {
            (roster.first().clone(), roster.second().clone())
        } else {
            (roster.second().clone(), roster.first().clone())
        };

        debug!(
            "settlement: {}={} {}={} -> {} pays {}",
            roster.first(),
            first_paid,
            roster.second(),
            second_paid,
            payer,
            payable
        );

        Settlement {
            payer,
            receiver,
            payable,
            first: roster.first().clone(),
            first_paid,
            second: roster.second().clone(),
            second_paid,
        }
    }
}
