//! Transaction validator — hard gate for ledger appends.
//!
//! Record invariants (`amount > 0`, distinct parties) are enforced by
//! [`Transaction::new`]. The validator adds the ledger policy on top:
//!
//! - **Fail-closed**: any failed check rejects the transaction
//! - **Quantized amounts**: no more fractional digits than the minor unit
//! - **Bounded amounts**: a per-transaction ceiling keeps sums far from overflow
//! - **Bounded log**: the ledger stops accepting at capacity

use cashflow_types::{CashflowError, Result, SettlementConfig, Transaction};
use rust_decimal::Decimal;

/// Policy gate applied to every transaction before it enters the ledger.
#[derive(Debug, Clone)]
pub struct TransactionValidator {
    /// Maximum fractional digits on an amount.
    amount_scale: u32,
    /// Maximum single amount.
    max_amount: Decimal,
    /// Maximum number of transactions in the ledger.
    max_transactions: usize,
}

impl TransactionValidator {
    /// Validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SettlementConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &SettlementConfig) -> Self {
        Self {
            amount_scale: config.amount_scale,
            max_amount: config.max_amount,
            max_transactions: config.max_transactions,
        }
    }

    /// Validate `tx` for appending to a ledger currently holding
    /// `current_len` transactions.
    ///
    /// # Errors
    /// - `InvalidTransaction` if the amount is non-positive, too precise, or too large
    /// - `LedgerFull` if the ledger is at capacity
    pub fn validate(&self, tx: &Transaction, current_len: usize) -> Result<()> {
        // 1. Record invariant, re-checked in case the value was built by hand
        if tx.amount <= Decimal::ZERO {
            return Err(CashflowError::InvalidTransaction {
                reason: "Amount must be positive".to_string(),
            });
        }

        // 2. Minor-unit quantization
        let scale = tx.amount.normalize().scale();
        if scale > self.amount_scale {
            return Err(CashflowError::InvalidTransaction {
                reason: format!(
                    "Amount {} has {scale} decimal places, at most {} allowed",
                    tx.amount, self.amount_scale
                ),
            });
        }

        // 3. Ceiling
        if tx.amount > self.max_amount {
            return Err(CashflowError::InvalidTransaction {
                reason: format!(
                    "Amount {} exceeds maximum {}",
                    tx.amount, self.max_amount
                ),
            });
        }

        // 4. Capacity
        if current_len >= self.max_transactions {
            return Err(CashflowError::LedgerFull {
                capacity: self.max_transactions,
            });
        }

        Ok(())
    }
}

impl Default for TransactionValidator {
    fn default() -> Self {
        Self::new()
    }
}
