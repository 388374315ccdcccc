//! System-wide constants for the cashflow workspace.

/// Fractional digits of the currency's minor unit (cents).
pub const DEFAULT_AMOUNT_SCALE: u32 = 2;

/// Scale of the default zero tolerance: `1e-4`, i.e. 0.01 of a minor unit.
pub const DEFAULT_TOLERANCE_SCALE: u32 = 4;

/// Maximum amount accepted for a single transaction (whole currency units).
pub const DEFAULT_MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Maximum number of transactions a ledger holds before rejecting appends.
pub const DEFAULT_MAX_TRANSACTIONS: usize = 100_000;

/// Maximum length of a person identifier, in characters.
pub const MAX_PERSON_ID_LEN: usize = 64;

/// Environment variable overriding [`crate::SettlementConfig::tolerance`].
pub const ENV_TOLERANCE: &str = "CASHFLOW_TOLERANCE";

/// Environment variable overriding [`crate::SettlementConfig::amount_scale`].
pub const ENV_AMOUNT_SCALE: &str = "CASHFLOW_AMOUNT_SCALE";

/// Environment variable overriding [`crate::SettlementConfig::max_amount`].
pub const ENV_MAX_AMOUNT: &str = "CASHFLOW_MAX_AMOUNT";

/// Environment variable overriding [`crate::SettlementConfig::max_transactions`].
pub const ENV_MAX_TRANSACTIONS: &str = "CASHFLOW_MAX_TRANSACTIONS";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "cashflow";
