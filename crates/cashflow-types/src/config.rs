//! Configuration for ledger validation and settlement.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CashflowError, Result, constants};

/// Numeric policy shared by the ledger and the minimizer.
///
/// The same `tolerance` must be used for balance filtering and for heap
/// admission, otherwise near-zero balances leak into plans as spurious
/// settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Balances and residuals with magnitude at or below this are zero.
    pub tolerance: Decimal,
    /// Maximum fractional digits accepted on a transaction amount.
    pub amount_scale: u32,
    /// Maximum amount accepted on a single transaction.
    pub max_amount: Decimal,
    /// Maximum number of transactions held by one ledger.
    pub max_transactions: usize,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(1, constants::DEFAULT_TOLERANCE_SCALE),
            amount_scale: constants::DEFAULT_AMOUNT_SCALE,
            max_amount: Decimal::new(constants::DEFAULT_MAX_AMOUNT, 0),
            max_transactions: constants::DEFAULT_MAX_TRANSACTIONS,
        }
    }
}

impl SettlementConfig {
    /// Defaults overridden by `CASHFLOW_*` environment variables.
    ///
    /// # Errors
    /// Returns [`CashflowError::Configuration`] if a variable is set but
    /// unparsable, or the resulting config fails [`Self::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse_var(&lookup, constants::ENV_TOLERANCE)? {
            cfg.tolerance = v;
        }
        if let Some(v) = parse_var(&lookup, constants::ENV_AMOUNT_SCALE)? {
            cfg.amount_scale = v;
        }
        if let Some(v) = parse_var(&lookup, constants::ENV_MAX_AMOUNT)? {
            cfg.max_amount = v;
        }
        if let Some(v) = parse_var(&lookup, constants::ENV_MAX_TRANSACTIONS)? {
            cfg.max_transactions = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Smallest representable non-zero amount at `amount_scale`.
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.amount_scale)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// Returns [`CashflowError::Configuration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance.is_sign_negative() {
            return Err(CashflowError::Configuration(format!(
                "tolerance must not be negative, got {}",
                self.tolerance
            )));
        }
        // Decimal supports at most 28 fractional digits.
        if self.amount_scale > 28 {
            return Err(CashflowError::Configuration(format!(
                "amount_scale must be at most 28, got {}",
                self.amount_scale
            )));
        }
        if self.tolerance >= self.minor_unit() {
            return Err(CashflowError::Configuration(format!(
                "tolerance {} must be smaller than one minor unit ({})",
                self.tolerance,
                self.minor_unit()
            )));
        }
        if self.max_amount <= Decimal::ZERO {
            return Err(CashflowError::Configuration(
                "max_amount must be positive".to_string(),
            ));
        }
        if self.max_transactions == 0 {
            return Err(CashflowError::Configuration(
                "max_transactions must be positive".to_string(),
            ));
        }
        // A full ledger of maximal amounts bounds every balance and every
        // partial sum; keep it within half of `Decimal::MAX`.
        let headroom = Decimal::MAX / Decimal::TWO;
        let volume = self
            .max_amount
            .checked_mul(Decimal::from(self.max_transactions));
        if volume.is_none_or(|v| v > headroom) {
            return Err(CashflowError::Configuration(format!(
                "max_amount {} times max_transactions {} exceeds the safe ceiling {headroom}",
                self.max_amount, self.max_transactions
            )));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| CashflowError::Configuration(format!("{key}={raw}: {e}")))
        })
        .transpose()
}
