//! Record-store engine for PaperChain.
//!
//! This crate is the heart of PaperChain. Given the content hash of a
//! paper, it registers an authorship/timestamp claim exactly once, serves
//! reads and existence checks, applies the one sanctioned mutation
//! (timestamp correction), and enumerates the store. It provides:
//!
//! - [`PaperContract`] — the six operations and the invariants they
//!   enforce over the host ledger's key space
//! - [`RecordScan`] / [`CorruptionPolicy`] — lazy full-store listing with
//!   an explicit policy for unreadable entries
//! - [`RecordEvent`] — the `PaperRecordCreated` / `PaperRecordUpdated`
//!   notifications
//! - [`ContractError`] — the caller-facing error taxonomy
//!
//! The engine owns no storage and no concurrency: every operation runs
//! inside one host-supplied [`TransactionContext`](paperchain_state::TransactionContext)
//! whose atomicity and isolation the host guarantees. Per key, the
//! lifecycle is `Absent → Present` via create (one-way), then
//! `Present(t1) → Present(t2)` via timestamp update (repeatable); there is
//! no delete.

pub mod contract;
pub mod error;
pub mod events;
pub mod scan;

pub use contract::PaperContract;
pub use error::{ContractError, ContractResult};
pub use events::RecordEvent;
pub use scan::{CorruptionPolicy, RecordScan};
