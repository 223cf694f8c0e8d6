use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name of a person who paid for an expense.
///
/// # Examples
///
/// ```
/// use expense_splitter::core::payee::PayeeName;
///
/// let rahul = PayeeName::new("Rahul");
/// let ramesh = PayeeName::new("Ramesh");
/// assert_ne!(rahul, ramesh);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayeeName(String);

impl PayeeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this payee name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PayeeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from building or querying a roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("payee name must not be empty")]
    EmptyName,
    #[error("roster payees must differ, got {0} twice")]
    DuplicatePayee(PayeeName),
    #[error("unknown payee '{0}'")]
    UnknownPayee(String),
}

/// The fixed pair of payees sharing expenses.
///
/// Order matters: settlement ties are charged to the second payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoster")]
pub struct Roster {
    first: PayeeName,
    second: PayeeName,
}

#[derive(Deserialize)]
struct RawRoster {
    first: PayeeName,
    second: PayeeName,
}

impl TryFrom<RawRoster> for Roster {
    type Error = RosterError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        Roster::new(raw.first, raw.second)
    }
}

impl Roster {
    pub fn new(first: PayeeName, second: PayeeName) -> Result<Self, RosterError> {
        if first.as_str().trim().is_empty() || second.as_str().trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if first == second {
            return Err(RosterError::DuplicatePayee(first));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &PayeeName {
        &self.first
    }

    pub fn second(&self) -> &PayeeName {
        &self.second
    }

    pub fn payees(&self) -> [&PayeeName; 2] {
        [&self.first, &self.second]
    }

    pub fn contains(&self, name: &PayeeName) -> bool {
        &self.first == name || &self.second == name
    }

    /// Look up a payee by its exact name.
    pub fn resolve(&self, name: &str) -> Result<PayeeName, RosterError> {
        self.payees()
            .into_iter()
            .find(|p| p.as_str() == name)
            .cloned()
            .ok_or_else(|| RosterError::UnknownPayee(name.to_string()))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            first: PayeeName::new("Rahul"),
            second: PayeeName::new("Ramesh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payee_display() {
        let p = PayeeName::new("Rahul");
        assert_eq!(format!("{}", p), "Rahul");
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.first().as_str(), "Rahul");
        assert_eq!(roster.second().as_str(), "Ramesh");
        assert!(roster.contains(&PayeeName::new("Ramesh")));
        assert!(!roster.contains(&PayeeName::new("Suresh")));
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let err = Roster::new(PayeeName::new("A"), PayeeName::new("A")).unwrap_err();
        assert_eq!(err, RosterError::DuplicatePayee(PayeeName::new("A")));
    }

    #[test]
    fn test_roster_rejects_blank_name() {
        let err = Roster::new(PayeeName::new("  "), PayeeName::new("B")).unwrap_err();
        assert_eq!(err, RosterError::EmptyName);
    }

    #[test]
    fn test_deserialize_validates() {
        let roster: Roster =
            serde_json::from_str(r#"{ "first": "Asha", "second": "Vikram" }"#).unwrap();
        assert_eq!(roster.second().as_str(), "Vikram");

        assert!(serde_json::from_str::<Roster>(r#"{ "first": "A", "second": "A" }"#).is_err());
        assert!(serde_json::from_str::<Roster>(r#"{ "first": "", "second": "B" }"#).is_err());
    }

    #[test]
    fn test_resolve_is_exact() {
        let roster = Roster::default();
        assert_eq!(roster.resolve("Rahul").unwrap(), PayeeName::new("Rahul"));
        assert!(matches!(
            roster.resolve("rahul"),
            Err(RosterError::UnknownPayee(_))
        ));
    }
}
