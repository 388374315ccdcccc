//! Settlement types produced by the minimizer.
//!
//! A [`Settlement`] is one proposed payment from a net debtor to a net
//! creditor. A [`SettlementPlan`] is the full ordered list that, applied to
//! the balances it was computed from, re-zeroes every one of them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PersonId;

/// One payment: `debtor` pays `creditor` a positive `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub debtor: PersonId,
    pub creditor: PersonId,
    pub amount: Decimal,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.debtor, self.creditor, self.amount)
    }
}

/// The deterministic output of one minimization run.
///
/// Ephemeral: never persisted, regenerated on each request from the
/// then-current balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Payments in emission order.
    pub settlements: Vec<Settlement>,
    /// Number of balances outside tolerance that the plan clears.
    pub participants: usize,
    /// SHA-256 digest over the ordered settlements, for reproducibility checks.
    #[serde(with = "hex_digest")]
    pub plan_root: [u8; 32],
}

impl SettlementPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    /// Upper bound on plan size: one fewer than the number of participants.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.participants.saturating_sub(1)
    }

    /// Total money moved by the plan.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.settlements.iter().map(|s| s.amount).sum()
    }
}

mod hex_digest {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(digest: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(digest))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let text = String::deserialize(d)?;
        let mut digest = [0u8; 32];
        hex::decode_to_slice(&text, &mut digest).map_err(de::Error::custom)?;
        Ok(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settlement(debtor: &str, creditor: &str, amount: i64) -> Settlement {
        Settlement {
            debtor: PersonId::parse(debtor).unwrap(),
            creditor: PersonId::parse(creditor).unwrap(),
            amount: Decimal::new(amount, 0),
        }
    }

    #[test]
    fn settlement_display() {
        let s = settlement("A", "C", 50);
        assert_eq!(format!("{s}"), "A pays C 50");
    }

    #[test]
    fn plan_bounds_and_totals() {
        let plan = SettlementPlan {
            settlements: vec![settlement("A", "D", 100), settlement("C", "E", 100)],
            participants: 4,
            plan_root: [7u8; 32],
        };
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.max_len(), 3);
        assert_eq!(plan.total_amount(), Decimal::new(200, 0));
    }

    #[test]
    fn empty_plan_bound_is_zero() {
        let plan = SettlementPlan {
            settlements: vec![],
            participants: 0,
            plan_root: [0u8; 32],
        };
        assert!(plan.is_empty());
        assert_eq!(plan.max_len(), 0);
    }

    #[test]
    fn plan_root_serializes_as_hex() {
        let plan = SettlementPlan {
            settlements: vec![settlement("A", "B", 1)],
            participants: 2,
            plan_root: [0xab; 32],
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains(&"ab".repeat(32)));
        let back: SettlementPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
