//! Ledger transactions.
//!
//! A [`Transaction`] is the immutable record that `debtor` owes `creditor`
//! `amount`. It is created on ledger append and never mutated.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CashflowError, PersonId, Result};

/// A directed debt: `debtor` owes `creditor` a positive `amount`.
///
/// Invariants: `amount > 0` and `debtor` is not the same person as
/// `creditor` (case-insensitively). Both hold for every value of this type,
/// including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// Person who owes money.
    pub debtor: PersonId,
    /// Person who is owed money.
    pub creditor: PersonId,
    /// Amount owed, strictly positive.
    pub amount: Decimal,
}

impl Transaction {
    /// Build a transaction, enforcing the record invariants.
    ///
    /// # Errors
    /// Returns [`CashflowError::InvalidTransaction`] if `amount <= 0` or
    /// debtor and creditor are the same person.
    pub fn new(debtor: PersonId, creditor: PersonId, amount: Decimal) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(CashflowError::InvalidTransaction {
                reason: format!("Amount must be positive, got {amount}"),
            });
        }
        if debtor.same_person(&creditor) {
            return Err(CashflowError::InvalidTransaction {
                reason: "Debtor and creditor cannot be the same".to_string(),
            });
        }
        Ok(Self {
            debtor,
            creditor,
            amount,
        })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.debtor, self.creditor, self.amount)
    }
}

#[derive(Deserialize)]
struct RawTransaction {
    debtor: PersonId,
    creditor: PersonId,
    amount: Decimal,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = CashflowError;

    fn try_from(raw: RawTransaction) -> Result<Self> {
        Self::new(raw.debtor, raw.creditor, raw.amount)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Transaction {
    /// Transaction of `cents` minor units between two named people.
    ///
    /// # Panics
    /// Panics if the names or amount violate the record invariants.
    pub fn dummy(debtor: &str, creditor: &str, cents: i64) -> Self {
        Self::new(
            PersonId::parse(debtor).expect("valid debtor name"),
            PersonId::parse(creditor).expect("valid creditor name"),
            Decimal::new(cents, 2),
        )
        .expect("valid dummy transaction")
    }
}
