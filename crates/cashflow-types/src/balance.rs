//! Net balance types.
//!
//! A [`BalanceSheet`] maps every person seen in the ledger to their net
//! signed balance: positive means they are owed money, negative means they
//! owe money. Money only moves between people, so the balances of any sheet
//! built from transactions sum to exactly zero.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PersonId, Settlement, Transaction};

/// Net signed balance per person, ordered by [`PersonId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSheet {
    balances: BTreeMap<PersonId, Decimal>,
}

impl BalanceSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transaction in: the debtor goes down by `amount`, the
    /// creditor goes up by `amount`. Unseen persons start at zero.
    pub fn post(&mut self, tx: &Transaction) {
        *self.balances.entry(tx.debtor.clone()).or_default() -= tx.amount;
        *self.balances.entry(tx.creditor.clone()).or_default() += tx.amount;
    }

    /// Fold one settlement payment in: the paying debtor moves up by
    /// `amount`, the receiving creditor moves down by `amount`.
    pub fn apply(&mut self, settlement: &Settlement) {
        *self.balances.entry(settlement.debtor.clone()).or_default() += settlement.amount;
        *self.balances.entry(settlement.creditor.clone()).or_default() -= settlement.amount;
    }

    /// Balance for a person, if they appear on the sheet.
    #[must_use]
    pub fn get(&self, person: &PersonId) -> Option<Decimal> {
        self.balances.get(person).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Decimal)> {
        self.balances.iter().map(|(p, b)| (p, *b))
    }

    /// Entries whose magnitude exceeds `tolerance`.
    pub fn outstanding(&self, tolerance: Decimal) -> impl Iterator<Item = (&PersonId, Decimal)> {
        self.iter().filter(move |(_, b)| b.abs() > tolerance)
    }

    /// Number of entries whose magnitude exceeds `tolerance`.
    #[must_use]
    pub fn outstanding_count(&self, tolerance: Decimal) -> usize {
        self.outstanding(tolerance).count()
    }

    /// Whether every balance is within `tolerance` of zero.
    #[must_use]
    pub fn is_settled(&self, tolerance: Decimal) -> bool {
        self.outstanding(tolerance).next().is_none()
    }

    /// Sum of all balances. Zero for any sheet built from transactions.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.balances.values().copied().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl FromIterator<(PersonId, Decimal)> for BalanceSheet {
    fn from_iter<I: IntoIterator<Item = (PersonId, Decimal)>>(iter: I) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}
