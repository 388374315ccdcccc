//! # cashflow-types
//!
//! Shared types, errors, and configuration for the **cashflow** settlement
//! workspace.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PersonId`]
//! - **Ledger model**: [`Transaction`]
//! - **Balance model**: [`BalanceSheet`]
//! - **Settlement model**: [`Settlement`], [`SettlementPlan`]
//! - **Configuration**: [`SettlementConfig`]
//! - **Errors**: [`CashflowError`] with `CF_ERR_` prefix codes
//! - **Constants**: limits and defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod settlement;
pub mod transaction;

// Re-export all primary types at crate root for ergonomic imports:
//   use cashflow_types::{PersonId, Transaction, BalanceSheet, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use settlement::*;
pub use transaction::*;

// Constants are accessed via `cashflow_types::constants::FOO`
// (not re-exported to avoid name collisions).
