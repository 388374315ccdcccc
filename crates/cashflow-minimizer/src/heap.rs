//! Max-heap of parties keyed by outstanding magnitude.
//!
//! Creditors and debtors each get their own [`PartyHeap`], so the largest
//! entry on either side is extracted in O(log n) without scanning. Both
//! store the **magnitude** of the balance (a debtor owing 40 is stored as 40).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cashflow_types::PersonId;
use rust_decimal::Decimal;

/// One party awaiting settlement.
///
/// Ordered by `amount`, largest first. Equal amounts are ordered by
/// `person` ascending, so the lexically smallest identifier pops first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyEntry {
    pub person: PersonId,
    /// Outstanding magnitude, always positive.
    pub amount: Decimal,
}

impl Ord for PartyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.person.cmp(&self.person))
    }
}

impl PartialOrd for PartyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap of [`PartyEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct PartyHeap {
    entries: BinaryHeap<PartyEntry>,
}

impl PartyHeap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a party with a positive outstanding `amount`.
    pub fn push(&mut self, person: PersonId, amount: Decimal) {
        debug_assert!(amount > Decimal::ZERO, "heap amounts are magnitudes");
        self.entries.push(PartyEntry { person, amount });
    }

    /// Remove and return the largest party.
    pub fn pop(&mut self) -> Option<PartyEntry> {
        self.entries.pop()
    }

    /// Peek at the largest party without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&PartyEntry> {
        self.entries.peek()
    }

    /// Sum of all outstanding amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(name: &str) -> PersonId {
        PersonId::parse(name).unwrap()
    }

    #[test]
    fn pops_largest_first() {
        let mut heap = PartyHeap::new();
        heap.push(pid("A"), Decimal::new(10, 0));
        heap.push(pid("B"), Decimal::new(30, 0));
        heap.push(pid("C"), Decimal::new(20, 0));

        let order: Vec<PersonId> = std::iter::from_fn(|| heap.pop()).map(|e| e.person).collect();
        assert_eq!(order, vec![pid("B"), pid("C"), pid("A")]);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let mut heap = PartyHeap::new();
        heap.push(pid("E"), Decimal::new(100, 0));
        heap.push(pid("D"), Decimal::new(100, 0));
        heap.push(pid("F"), Decimal::new(100, 0));

        assert_eq!(heap.pop().unwrap().person, pid("D"));
        assert_eq!(heap.pop().unwrap().person, pid("E"));
        assert_eq!(heap.pop().unwrap().person, pid("F"));
        assert!(heap.pop().is_none());
    }

    #[test]
    fn amount_dominates_tie_break() {
        let mut heap = PartyHeap::new();
        heap.push(pid("A"), Decimal::new(1, 0));
        heap.push(pid("Z"), Decimal::new(2, 0));
        assert_eq!(heap.peek().unwrap().person, pid("Z"));
    }

    #[test]
    fn scale_does_not_affect_order() {
        // 5.00 and 5 are the same amount; the tie-break decides.
        let mut heap = PartyHeap::new();
        heap.push(pid("B"), Decimal::new(500, 2));
        heap.push(pid("A"), Decimal::new(5, 0));
        assert_eq!(heap.pop().unwrap().person, pid("A"));
    }

    #[test]
    fn total_and_len() {
        let mut heap = PartyHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.total(), Decimal::ZERO);
        heap.push(pid("A"), Decimal::new(150, 2));
        heap.push(pid("B"), Decimal::new(250, 2));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.total(), Decimal::new(4, 0));
    }
}
