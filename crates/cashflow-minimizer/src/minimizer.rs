//! Greedy minimum cash flow settlement.
//!
//! The core function: takes a [`BalanceSheet`] snapshot and produces a
//! [`SettlementPlan`]. No side effects, no ledger access.
//!
//! ```text
//! minimize(BalanceSheet, tolerance) -> SettlementPlan
//! ```
//!
//! ## Pairing
//!
//! The largest remaining creditor is always paired with the largest
//! remaining debtor. Each payment fully clears at least one of the two, so
//! `n` non-zero balances settle in at most `n - 1` payments. Equal
//! magnitudes pop in ascending [`PersonId`] order, which makes the plan
//! reproducible.
//!
//! [`PersonId`]: cashflow_types::PersonId

use cashflow_types::{BalanceSheet, CashflowError, Result, Settlement, SettlementPlan};
use rust_decimal::Decimal;

use crate::{
    determinism::compute_plan_root,
    heap::{PartyEntry, PartyHeap},
};

/// Compute the settlement plan for `balances`.
///
/// ## Algorithm
///
/// 1. Balances above `tolerance` go on the creditor heap, balances below
///    `-tolerance` go on the debtor heap by magnitude; the rest are settled
/// 2. Pop the largest creditor and the largest debtor
/// 3. Emit a payment of the smaller of the two amounts
/// 4. Push back whichever side still has a residual above `tolerance`
/// 5. Repeat until either heap is empty
/// 6. Both heaps must now be empty, otherwise the balances did not sum to zero
///
/// # Errors
/// Returns [`CashflowError::ImbalancedLedger`] if one side is left holding
/// entries. No partial plan is returned.
pub fn minimize(balances: &BalanceSheet, tolerance: Decimal) -> Result<SettlementPlan> {
    let tolerance = tolerance.max(Decimal::ZERO);

    // 1. Partition into the two heaps
    let mut creditors = PartyHeap::new();
    let mut debtors = PartyHeap::new();
    for (person, balance) in balances.outstanding(tolerance) {
        if balance.is_sign_positive() {
            creditors.push(person.clone(), balance);
        } else {
            debtors.push(person.clone(), -balance);
        }
    }
    let participants = creditors.len() + debtors.len();

    // 2-5. Greedy pairing
    let mut settlements = Vec::with_capacity(participants.saturating_sub(1));
    while let Some((creditor, debtor)) = pop_pair(&mut creditors, &mut debtors) {
        let amount = creditor.amount.min(debtor.amount);

        tracing::debug!(
            debtor = %debtor.person,
            creditor = %creditor.person,
            %amount,
            "Settlement emitted"
        );

        let creditor_left = creditor.amount - amount;
        let debtor_left = debtor.amount - amount;

        settlements.push(Settlement {
            debtor: debtor.person.clone(),
            creditor: creditor.person.clone(),
            amount,
        });

        if creditor_left > tolerance {
            creditors.push(creditor.person, creditor_left);
        }
        if debtor_left > tolerance {
            debtors.push(debtor.person, debtor_left);
        }
    }

    // 6. Conservation check
    if !creditors.is_empty() || !debtors.is_empty() {
        let residual = creditors.total() - debtors.total();
        tracing::error!(
            creditors_left = creditors.len(),
            debtors_left = debtors.len(),
            %residual,
            "Balances do not sum to zero"
        );
        return Err(CashflowError::ImbalancedLedger {
            creditors_left: creditors.len(),
            debtors_left: debtors.len(),
            residual,
        });
    }

    let plan_root = compute_plan_root(&settlements);

    tracing::info!(
        participants,
        settlements = settlements.len(),
        plan_root = hex::encode(plan_root),
        "Settlement plan computed"
    );

    Ok(SettlementPlan {
        settlements,
        participants,
        plan_root,
    })
}

/// Pop the top of both heaps, or nothing if either is empty.
fn pop_pair(
    creditors: &mut PartyHeap,
    debtors: &mut PartyHeap,
) -> Option<(PartyEntry, PartyEntry)> {
    if creditors.is_empty() || debtors.is_empty() {
        return None;
    }
    Some((creditors.pop()?, debtors.pop()?))
}
