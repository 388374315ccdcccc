//! # cashflow-minimizer
//!
//! **Pure deterministic settlement minimizer.**
//!
//! The minimizer is the compute plane -- it takes a snapshot of net
//! balances and produces the payments that settle them. It has:
//!
//! - **Zero side effects**: never touches the ledger or the balances it reads
//! - **Deterministic output**: same balances -> same plan, same `plan_root`
//! - **Bounded plans**: at most `participants - 1` settlements
//! - **Atomic failure**: a complete balance-zeroing plan or an error, never a partial plan

pub mod determinism;
pub mod heap;
pub mod minimizer;
pub mod verify;

pub use determinism::{compute_plan_root, verify_plan_root};
pub use heap::{PartyEntry, PartyHeap};
pub use minimizer::minimize;
pub use verify::verify_plan;
