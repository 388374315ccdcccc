//! The transaction ledger.
//!
//! Owns the ordered, append-only log of every recorded [`Transaction`].
//! Entries are never mutated; the only removal is a full [`Ledger::clear`].
//! The ledger is passed explicitly to whoever needs it — there is no
//! process-wide instance.

use cashflow_types::{BalanceSheet, CashflowError, PersonId, Result, SettlementConfig, Transaction};
use rust_decimal::Decimal;

use crate::{aggregator::aggregate, validator::TransactionValidator};

/// Append-only log of transactions.
///
/// The core assumes single-writer access: callers sharing a ledger across
/// threads wrap it in their own lock and hand the aggregator a consistent
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Transactions in arrival order.
    transactions: Vec<Transaction>,
    /// Policy gate applied on every append.
    validator: TransactionValidator,
}

impl Ledger {
    /// Create an empty ledger with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with limits taken from `config`.
    #[must_use]
    pub fn with_config(config: &SettlementConfig) -> Self {
        Self {
            transactions: Vec::new(),
            validator: TransactionValidator::from_config(config),
        }
    }

    /// Parse, validate, and append a transaction from raw request fields.
    ///
    /// # Errors
    /// - `InvalidPersonId` if either name is malformed
    /// - `InvalidTransaction` if the amount or parties violate policy
    /// - `LedgerFull` if the ledger is at capacity
    pub fn record(&mut self, debtor: &str, creditor: &str, amount: Decimal) -> Result<&Transaction> {
        let tx = PersonId::parse(debtor)
            .and_then(|d| PersonId::parse(creditor).map(|c| (d, c)))
            .and_then(|(d, c)| Transaction::new(d, c, amount))
            .inspect_err(|err| {
                tracing::warn!(debtor, creditor, %amount, error = %err, "Transaction rejected");
            })?;
        self.push(tx)?;
        self.transactions
            .last()
            .ok_or_else(|| CashflowError::Internal("append left the ledger empty".to_string()))
    }

    /// Validate and append an already-built transaction.
    ///
    /// # Errors
    /// Returns the validator's error; the ledger is unchanged on failure.
    pub fn push(&mut self, tx: Transaction) -> Result<()> {
        if let Err(err) = self.validator.validate(&tx, self.transactions.len()) {
            tracing::warn!(transaction = %tx, error = %err, "Transaction rejected");
            return Err(err);
        }
        tracing::debug!(
            debtor = %tx.debtor,
            creditor = %tx.creditor,
            amount = %tx.amount,
            seq = self.transactions.len(),
            "Transaction recorded"
        );
        self.transactions.push(tx);
        Ok(())
    }

    /// All transactions in arrival order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Net balances, recomputed from the full log.
    #[must_use]
    pub fn balances(&self) -> BalanceSheet {
        aggregate(&self.transactions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Remove every transaction. Returns how many were removed.
    ///
    /// Afterwards the ledger behaves exactly like a fresh one.
    pub fn clear(&mut self) -> usize {
        let removed = self.transactions.len();
        self.transactions.clear();
        tracing::info!(removed, "Ledger cleared");
        removed
    }
}
