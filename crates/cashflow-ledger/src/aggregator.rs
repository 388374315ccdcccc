//! Balance aggregation.
//!
//! Folds an ordered transaction log into one net signed balance per
//! person. Decimal addition is exact, so the result depends only on the
//! multiset of transactions, never on their order.

use cashflow_types::{BalanceSheet, Transaction};

/// Net every transaction into a [`BalanceSheet`].
///
/// For each transaction the debtor's running total goes down by `amount`
/// and the creditor's goes up by `amount`. The output contains exactly the
/// persons that appear in at least one transaction, including those whose
/// net balance is zero.
pub fn aggregate<'a, I>(transactions: I) -> BalanceSheet
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sheet = BalanceSheet::new();
    let mut folded = 0usize;
    for tx in transactions {
        sheet.post(tx);
        folded += 1;
    }
    tracing::debug!(
        transactions = folded,
        persons = sheet.len(),
        "Balances aggregated"
    );
    sheet
}
