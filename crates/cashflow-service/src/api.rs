//! Request and response types for the four service operations.

use cashflow_types::{BalanceSheet, Settlement, SettlementPlan, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw `record_transaction` request, before any validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    pub debtor: String,
    pub creditor: String,
    pub amount: Decimal,
}

/// Response to `record_transaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// The transaction as stored (names trimmed).
    pub transaction: Transaction,
    /// Full ledger after the append.
    pub transactions: Vec<Transaction>,
    /// Balances after the append.
    pub balances: BalanceSheet,
}

/// Response to `query_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub balances: BalanceSheet,
}

/// Response to `compute_settlement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Payments in emission order.
    pub settlements: Vec<Settlement>,
    pub settlement_count: usize,
    /// Number of transactions in the ledger the plan was computed from.
    pub original_transaction_count: usize,
    /// `original_transaction_count - settlement_count`; negative when the
    /// plan needs more payments than the ledger has entries.
    pub reduction: i64,
    /// Number of non-zero balances the plan clears.
    pub participants: usize,
    /// Hex SHA-256 digest of the ordered settlements.
    pub plan_root: String,
}

impl SettlementReport {
    /// Build the report for `plan`, computed over a ledger of
    /// `original_transaction_count` entries.
    #[must_use]
    pub fn from_plan(plan: SettlementPlan, original_transaction_count: usize) -> Self {
        let settlement_count = plan.len();
        let reduction = to_i64(original_transaction_count) - to_i64(settlement_count);
        Self {
            plan_root: hex::encode(plan.plan_root),
            participants: plan.participants,
            settlements: plan.settlements,
            settlement_count,
            original_transaction_count,
            reduction,
        }
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Response to `clear_ledger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearOutcome {
    pub success: bool,
    /// Number of transactions removed.
    pub cleared: usize,
}
