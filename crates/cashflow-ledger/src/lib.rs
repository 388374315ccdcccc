//! # cashflow-ledger
//!
//! **Ledger plane**: transaction intake, input validation, and balance
//! aggregation.
//!
//! ## Architecture
//!
//! The ledger sits between the request layer and the minimizer:
//! 1. **TransactionValidator**: hard gate — rejects transactions outside policy
//! 2. **Ledger**: owns the ordered, append-only transaction log
//! 3. **aggregate**: folds any transaction sequence into a [`BalanceSheet`]
//!
//! ## Flow
//!
//! ```text
//! request → PersonId::parse() → Transaction::new() → TransactionValidator.validate()
//!         → Ledger.push() → aggregate() → BalanceSheet → minimizer
//! ```
//!
//! Balances are never stored: every query re-aggregates the full log, so
//! there is no cached state to go stale.
//!
//! [`BalanceSheet`]: cashflow_types::BalanceSheet

pub mod aggregator;
pub mod ledger;
pub mod validator;

pub use aggregator::aggregate;
pub use ledger::Ledger;
pub use validator::TransactionValidator;
