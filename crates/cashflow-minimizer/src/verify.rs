//! Settlement plan verification.
//!
//! Invariant checked before a plan leaves the service:
//! ```text
//! apply(balances, plan) == 0 (within tolerance)  and  len(plan) <= max(0, n - 1)
//! ```
//! where `n` is the number of balances outside tolerance.

use cashflow_types::{BalanceSheet, CashflowError, Result, Settlement};
use rust_decimal::Decimal;

/// Re-apply `settlements` to a copy of `balances` and check the result.
///
/// # Errors
/// Returns [`CashflowError::PlanDoesNotSettle`] if a settlement is
/// non-positive or self-directed, the plan exceeds the size bound, or any
/// balance is left outside `tolerance`.
pub fn verify_plan(
    balances: &BalanceSheet,
    settlements: &[Settlement],
    tolerance: Decimal,
) -> Result<()> {
    for (i, s) in settlements.iter().enumerate() {
        if s.amount <= Decimal::ZERO {
            return Err(CashflowError::PlanDoesNotSettle {
                reason: format!("settlement {i} ({s}) has a non-positive amount"),
            });
        }
        if s.debtor == s.creditor {
            return Err(CashflowError::PlanDoesNotSettle {
                reason: format!("settlement {i} ({s}) pays itself"),
            });
        }
    }

    let bound = balances.outstanding_count(tolerance).saturating_sub(1);
    if settlements.len() > bound {
        return Err(CashflowError::PlanDoesNotSettle {
            reason: format!(
                "{} settlements exceed the bound of {bound}",
                settlements.len()
            ),
        });
    }

    let mut residual = balances.clone();
    for s in settlements {
        residual.apply(s);
    }
    if let Some((person, left)) = residual.outstanding(tolerance).next() {
        return Err(CashflowError::PlanDoesNotSettle {
            reason: format!("{person} is left with {left}"),
        });
    }
    Ok(())
}
