//! # cashflow-service
//!
//! **Request layer**: the four logical operations a transport exposes over
//! the ledger and the minimizer.
//!
//! ## Operations
//!
//! | operation | effect |
//! |---|---|
//! | [`CashflowService::record_transaction`] | validate + append, return balances |
//! | [`CashflowService::query_state`] | ledger verbatim + balances |
//! | [`CashflowService::compute_settlement`] | aggregate → minimize → verify |
//! | [`CashflowService::clear_ledger`] | empty the ledger |
//! | [`settle_json`] | record a JSON ledger on a fresh service and settle it |
//!
//! Every response type is `serde`-serializable so any transport can render
//! it directly. The service itself does no I/O.

pub mod api;
pub mod service;
pub mod telemetry;

pub use api::{ClearOutcome, LedgerState, RecordOutcome, SettlementReport, TransactionInput};
pub use service::{CashflowService, settle_json};
