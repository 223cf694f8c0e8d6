use crate::core::payee::PayeeName;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier assigned to an expense by the item service.
///
/// json-server style stores hand out either integers or short strings, so
/// both are accepted. New ids minted here are UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    Number(u64),
    Text(String),
}

impl ExpenseId {
    pub fn new() -> Self {
        Self::Text(Uuid::new_v4().to_string())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for ExpenseId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Largest price a single expense may carry.
///
/// Keeps every sum over a session's records far below `Decimal::MAX`.
pub const MAX_PRICE: Decimal = dec!(1_000_000_000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("expense price must not be negative, got {0}")]
    NegativePrice(Decimal),
    #[error("expense price must not exceed {max}, got {price}")]
    PriceTooLarge { price: Decimal, max: Decimal },
}

/// An expense that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    payee_name: PayeeName,
    product: String,
    price: Decimal,
    set_date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        payee_name: PayeeName,
        product: impl Into<String>,
        price: Decimal,
        set_date: NaiveDate,
    ) -> Result<Self, ExpenseError> {
        if price < Decimal::ZERO {
            return Err(ExpenseError::NegativePrice(price));
        }
        if price > MAX_PRICE {
            return Err(ExpenseError::PriceTooLarge {
                price,
                max: MAX_PRICE,
            });
        }
        Ok(Self {
            payee_name,
            product: product.into(),
            price,
            set_date,
        })
    }

    pub fn payee_name(&self) -> &PayeeName {
        &self.payee_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_date(&self) -> NaiveDate {
        self.set_date
    }

    /// Attach an id, producing the stored record.
    pub fn into_record(self, id: ExpenseId) -> ExpenseRecord {
        ExpenseRecord {
            id,
            payee_name: self.payee_name,
            product: self.product,
            price: self.price,
            set_date: self.set_date,
        }
    }
}

/// A single paid expense.
///
/// Records are immutable once created; there are no setters.
///
/// # Examples
///
/// ```
/// use expense_splitter::core::expense::{ExpenseId, NewExpense};
/// use expense_splitter::core::payee::PayeeName;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let record = NewExpense::new(
///     PayeeName::new("Rahul"),
///     "Groceries",
///     dec!(10),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// )
/// .unwrap()
/// .into_record(ExpenseId::new());
///
/// assert_eq!(record.price(), dec!(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawExpenseRecord")]
pub struct ExpenseRecord {
    id: ExpenseId,
    payee_name: PayeeName,
    product: String,
    price: Decimal,
    set_date: NaiveDate,
}

/// Wire shape used to validate records coming from storage.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExpenseRecord {
    id: ExpenseId,
    payee_name: PayeeName,
    product: String,
    price: Decimal,
    set_date: NaiveDate,
}

impl TryFrom<RawExpenseRecord> for ExpenseRecord {
    type Error = ExpenseError;

    fn try_from(raw: RawExpenseRecord) -> Result<Self, Self::Error> {
        Ok(NewExpense::new(raw.payee_name, raw.product, raw.price, raw.set_date)?
            .into_record(raw.id))
    }
}

impl ExpenseRecord {
    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    pub fn payee_name(&self) -> &PayeeName {
        &self.payee_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_date(&self) -> NaiveDate {
        self.set_date
    }
}

/// Append-only, ordered collection of expense records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseList {
    records: Vec<ExpenseRecord>,
}

impl ExpenseList {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All distinct payees in this list, sorted.
    pub fn payees(&self) -> Vec<PayeeName> {
        let mut payees: Vec<PayeeName> = self
            .records
            .iter()
            .map(|r| r.payee_name().clone())
            .collect();
        payees.sort();
        payees.dedup();
        payees
    }
}

impl FromIterator<ExpenseRecord> for ExpenseList {
    fn from_iter<T: IntoIterator<Item = ExpenseRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ExpenseRecord>> for ExpenseList {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ExpenseList {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
