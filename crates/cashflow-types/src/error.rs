//! Error types for the cashflow workspace.
//!
//! All errors use the `CF_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Ledger input errors
//! - 2xx: Balance / minimization errors
//! - 3xx: Plan verification errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Central error enum for all cashflow operations.
#[derive(Debug, Error)]
pub enum CashflowError {
    // =================================================================
    // Ledger Input Errors (1xx)
    // =================================================================
    /// The transaction violates a record invariant or a ledger policy
    /// (non-positive amount, self-payment, excess precision, etc.).
    #[error("CF_ERR_100: Invalid transaction: {reason}")]
    InvalidTransaction { reason: String },

    /// A person identifier is empty, too long, or contains control characters.
    #[error("CF_ERR_101: Invalid person id: {reason}")]
    InvalidPersonId { reason: String },

    /// The ledger holds the maximum number of transactions.
    #[error("CF_ERR_102: Ledger full: capacity {capacity} reached")]
    LedgerFull { capacity: usize },

    // =================================================================
    // Balance / Minimization Errors (2xx)
    // =================================================================
    /// Balances do not sum to zero, so the greedy pass ended with one side
    /// still holding entries. Always fatal to that computation.
    #[error(
        "CF_ERR_200: Imbalanced ledger: {creditors_left} creditor(s) and \
         {debtors_left} debtor(s) left unsettled, residual {residual}"
    )]
    ImbalancedLedger {
        creditors_left: usize,
        debtors_left: usize,
        residual: Decimal,
    },

    // =================================================================
    // Plan Verification Errors (3xx)
    // =================================================================
    /// Applying a settlement plan to its balances did not re-zero them.
    #[error("CF_ERR_300: Plan does not settle balances: {reason}")]
    PlanDoesNotSettle { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("CF_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("CF_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (unparsable override, out-of-range value).
    #[error("CF_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("CF_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CashflowError>;

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = CashflowError::InvalidTransaction {
            reason: "Amount must be positive".into(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("CF_ERR_100"), "Got: {msg}");
        assert!(msg.contains("Amount must be positive"));
    }

    #[test]
    fn imbalanced_ledger_display() {
        let err = CashflowError::ImbalancedLedger {
            creditors_left: 1,
            debtors_left: 0,
            residual: Decimal::new(2500, 2),
        };
        let msg = format!("{err}");
        assert!(msg.contains("CF_ERR_200"));
        assert!(msg.contains("1 creditor(s)"));
        assert!(msg.contains("25.00"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ledger.json");
        let err: CashflowError = io.into();
        assert!(matches!(err, CashflowError::Io(ref m) if m.contains("ledger.json")));
    }

    #[test]
    fn json_error_converts() {
        let bad = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        let err: CashflowError = bad.into();
        assert!(format!("{err}").starts_with("CF_ERR_901"));
    }

    #[test]
    fn all_errors_have_cf_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(CashflowError::InvalidPersonId { reason: "empty".into() }),
            Box::new(CashflowError::LedgerFull { capacity: 10 }),
            Box::new(CashflowError::PlanDoesNotSettle { reason: "x".into() }),
            Box::new(CashflowError::Internal("test".into())),
            Box::new(CashflowError::Configuration("bad".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("CF_ERR_"),
                "Error missing CF_ERR_ prefix: {msg}"
            );
        }
    }
}
