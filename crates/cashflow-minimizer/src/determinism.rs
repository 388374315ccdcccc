//! Plan digests for reproducibility checks.
//!
//! Minimizing the same balances must always yield the same plan. The
//! `plan_root` is a SHA-256 hash over the ordered settlements that lets a
//! caller confirm two plans are identical without comparing them field by
//! field.

use cashflow_types::Settlement;
use sha2::{Digest, Sha256};

/// Compute the root hash over an ordered list of settlements.
///
/// Depends on settlement order, parties, and normalized amounts, so
/// `5.00` and `5` hash the same.
#[must_use]
pub fn compute_plan_root(settlements: &[Settlement]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"cashflow:plan_root:v1:");
    hasher.update((settlements.len() as u64).to_le_bytes());

    for s in settlements {
        // Length-prefix every variable field so adjacent names cannot alias.
        for field in [s.debtor.as_str(), s.creditor.as_str()] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        let amount = s.amount.normalize().to_string();
        hasher.update((amount.len() as u64).to_le_bytes());
        hasher.update(amount.as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root for `settlements` and compare with `expected_root`.
#[must_use]
pub fn verify_plan_root(settlements: &[Settlement], expected_root: &[u8; 32]) -> bool {
    let actual = compute_plan_root(settlements);
    if actual != *expected_root {
        tracing::debug!(
            expected = hex::encode(expected_root),
            actual = hex::encode(actual),
            "Plan root mismatch"
        );
        return false;
    }
    true
}
