//! The cashflow service.
//!
//! Owns one [`Ledger`] and the [`SettlementConfig`] it was built with, and
//! exposes the four request-layer operations over them:
//! 1. Validate and record transactions
//! 2. Report the ledger and its balances
//! 3. Aggregate, minimize, and verify a settlement plan
//! 4. Clear the ledger
//!
//! Every balance and plan is recomputed from the full log on demand. The
//! service assumes one writer at a time; a transport sharing it across
//! requests puts it behind its own lock.

use cashflow_ledger::Ledger;
use cashflow_minimizer::{minimize, verify_plan};
use cashflow_types::{Result, SettlementConfig};
use rust_decimal::Decimal;

use crate::api::{ClearOutcome, LedgerState, RecordOutcome, SettlementReport, TransactionInput};

/// Group ledger plus settlement over it.
#[derive(Debug, Clone, Default)]
pub struct CashflowService {
    ledger: Ledger,
    config: SettlementConfig,
}

impl CashflowService {
    /// Service with default configuration and an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Service with a validated custom configuration.
    ///
    /// # Errors
    /// Returns `Configuration` if `config` fails validation.
    pub fn with_config(config: SettlementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ledger: Ledger::with_config(&config),
            config,
        })
    }

    /// Service configured from `CASHFLOW_*` environment variables.
    ///
    /// # Errors
    /// Returns `Configuration` if a variable is unparsable or the resulting
    /// config is inconsistent.
    pub fn from_env() -> Result<Self> {
        let config = SettlementConfig::from_env()?;
        Ok(Self {
            ledger: Ledger::with_config(&config),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Append a transaction and return the resulting balances.
    ///
    /// # Errors
    /// Rejects malformed names, non-positive or over-precise amounts,
    /// self-payments, and appends past capacity. The ledger is unchanged
    /// on error.
    pub fn record_transaction(
        &mut self,
        debtor: &str,
        creditor: &str,
        amount: Decimal,
    ) -> Result<RecordOutcome> {
        let transaction = self.ledger.record(debtor, creditor, amount)?.clone();
        Ok(RecordOutcome {
            transaction,
            transactions: self.ledger.transactions().to_vec(),
            balances: self.ledger.balances(),
        })
    }

    /// The ledger verbatim plus current balances.
    #[must_use]
    pub fn query_state(&self) -> LedgerState {
        LedgerState {
            transactions: self.ledger.transactions().to_vec(),
            balances: self.ledger.balances(),
        }
    }

    /// Compute the settlement plan for the current ledger.
    ///
    /// # Errors
    /// - `ImbalancedLedger` if the balances fail to net to zero
    /// - `PlanDoesNotSettle` if the plan fails re-verification
    ///
    /// Either way no partial plan is returned.
    pub fn compute_settlement(&self) -> Result<SettlementReport> {
        let balances = self.ledger.balances();
        let plan = minimize(&balances, self.config.tolerance)?;
        verify_plan(&balances, &plan.settlements, self.config.tolerance)?;

        let report = SettlementReport::from_plan(plan, self.ledger.len());
        tracing::info!(
            transactions = report.original_transaction_count,
            settlements = report.settlement_count,
            reduction = report.reduction,
            "Settlement computed"
        );
        Ok(report)
    }

    /// Remove every transaction. The next query behaves like a fresh ledger.
    pub fn clear_ledger(&mut self) -> ClearOutcome {
        let cleared = self.ledger.clear();
        ClearOutcome {
            success: true,
            cleared,
        }
    }
}

/// Settle a JSON array of `{debtor, creditor, amount}` objects in one shot.
///
/// Every entry is recorded on a fresh service built from `config`; the first
/// rejected entry aborts the run.
///
/// # Errors
/// - `Serialization` if `input` is not a JSON array of transaction inputs
/// - any error of [`CashflowService::with_config`],
///   [`CashflowService::record_transaction`], or
///   [`CashflowService::compute_settlement`]
pub fn settle_json(input: &str, config: SettlementConfig) -> Result<SettlementReport> {
    let requests: Vec<TransactionInput> = serde_json::from_str(input)?;
    let mut service = CashflowService::with_config(config)?;
    tracing::info!(transactions = requests.len(), "Loading ledger");

    for (index, req) in requests.iter().enumerate() {
        service
            .record_transaction(&req.debtor, &req.creditor, req.amount)
            .inspect_err(|err| tracing::warn!(index, error = %err, "Ledger entry rejected"))?;
    }
    service.compute_settlement()
}

#[cfg(test)]
mod tests {
    use cashflow_types::{CashflowError, PersonId};

    use super::*;

    fn pid(name: &str) -> PersonId {
        PersonId::parse(name).unwrap()
    }

    #[test]
    fn record_returns_balances() {
        let mut svc = CashflowService::new();
        let out = svc.record_transaction("A", "B", Decimal::new(100, 0)).unwrap();
        assert_eq!(out.transaction.debtor, pid("A"));
        assert_eq!(out.transactions.len(), 1);
        assert_eq!(out.balances.get(&pid("A")), Some(Decimal::new(-100, 0)));
        assert_eq!(out.balances.get(&pid("B")), Some(Decimal::new(100, 0)));
    }

    #[test]
    fn rejected_record_leaves_state_untouched() {
        let mut svc = CashflowService::new();
        svc.record_transaction("A", "B", Decimal::ONE).unwrap();
        let before = svc.query_state();
        assert!(svc.record_transaction("A", "a", Decimal::ONE).is_err());
        assert!(svc.record_transaction("A", "B", Decimal::new(1, 3)).is_err());
        assert_eq!(svc.query_state(), before);
    }

    #[test]
    fn settlement_on_empty_ledger() {
        let svc = CashflowService::new();
        let report = svc.compute_settlement().unwrap();
        assert!(report.settlements.is_empty());
        assert_eq!(report.settlement_count, 0);
        assert_eq!(report.original_transaction_count, 0);
        assert_eq!(report.reduction, 0);
    }

    #[test]
    fn settlement_does_not_mutate_ledger() {
        let mut svc = CashflowService::new();
        svc.record_transaction("A", "B", Decimal::new(50, 0)).unwrap();
        svc.record_transaction("B", "C", Decimal::new(50, 0)).unwrap();
        let before = svc.query_state();
        let first = svc.compute_settlement().unwrap();
        let second = svc.compute_settlement().unwrap();
        assert_eq!(svc.query_state(), before);
        assert_eq!(first, second);
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut svc = CashflowService::new();
        svc.record_transaction("A", "B", Decimal::ONE).unwrap();
        let out = svc.clear_ledger();
        assert!(out.success);
        assert_eq!(out.cleared, 1);
        assert!(svc.ledger().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SettlementConfig {
            tolerance: Decimal::ONE,
            ..SettlementConfig::default()
        };
        let err = CashflowService::with_config(cfg).unwrap_err();
        assert!(matches!(err, CashflowError::Configuration(_)));
    }

    #[test]
    fn custom_scale_accepts_finer_amounts() {
        let cfg = SettlementConfig {
            amount_scale: 4,
            tolerance: Decimal::new(1, 6),
            ..SettlementConfig::default()
        };
        let mut svc = CashflowService::with_config(cfg).unwrap();
        svc.record_transaction("A", "B", Decimal::new(12_345, 4)).unwrap();
        let report = svc.compute_settlement().unwrap();
        assert_eq!(report.settlements[0].amount, Decimal::new(12_345, 4));
    }

    #[test]
    fn overflowing_limits_rejected() {
        let cfg = SettlementConfig {
            max_amount: Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0),
            ..SettlementConfig::default()
        };
        let err = CashflowService::with_config(cfg).unwrap_err();
        assert!(matches!(err, CashflowError::Configuration(_)));
    }

    #[test]
    fn largest_accepted_limits_still_settle() {
        let max = Decimal::from_i128_with_scale(19 * 10_i128.pow(27), 0);
        let cfg = SettlementConfig {
            max_amount: max,
            max_transactions: 2,
            ..SettlementConfig::default()
        };
        let mut svc = CashflowService::with_config(cfg).unwrap();
        svc.record_transaction("A", "B", max).unwrap();
        svc.record_transaction("C", "B", max).unwrap();
        assert!(svc.record_transaction("C", "B", Decimal::ONE).is_err());

        let state = svc.query_state();
        assert_eq!(state.balances.get(&pid("B")), Some(max * Decimal::TWO));
        let report = svc.compute_settlement().unwrap();
        assert_eq!(report.settlement_count, 2);
    }

    #[test]
    fn settle_json_reports_plan() {
        let input = r#"[
            {"debtor": "A", "creditor": "B", "amount": "100"},
            {"debtor": "B", "creditor": "C", "amount": 50}
        ]"#;
        let report = settle_json(input, SettlementConfig::default()).unwrap();
        assert_eq!(report.original_transaction_count, 2);
        assert_eq!(report.settlement_count, 2);
        let pairs: Vec<(&str, &str, Decimal)> = report
            .settlements
            .iter()
            .map(|s| (s.debtor.as_str(), s.creditor.as_str(), s.amount))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A", "B", Decimal::new(50, 0)),
                ("A", "C", Decimal::new(50, 0)),
            ]
        );
    }

    #[test]
    fn settle_json_empty_array() {
        let report = settle_json("[]", SettlementConfig::default()).unwrap();
        assert!(report.settlements.is_empty());
        assert_eq!(report.reduction, 0);
    }

    #[test]
    fn settle_json_rejects_self_payment() {
        let input = r#"[
            {"debtor": "A", "creditor": "B", "amount": "10"},
            {"debtor": "Bob", "creditor": "bob", "amount": "5"}
        ]"#;
        let err = settle_json(input, SettlementConfig::default()).unwrap_err();
        assert!(matches!(err, CashflowError::InvalidTransaction { .. }));
    }

    #[test]
    fn settle_json_rejects_malformed_input() {
        let err = settle_json("[{\"debtor\": \"A\"", SettlementConfig::default()).unwrap_err();
        assert!(matches!(err, CashflowError::Serialization(_)));

        let err = settle_json(r#"{"debtor": "A"}"#, SettlementConfig::default()).unwrap_err();
        assert!(matches!(err, CashflowError::Serialization(_)));
    }
}
