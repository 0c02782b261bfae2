//! Ledger-adapter boundary for PaperChain.
//!
//! The record-store engine never talks to a concrete ledger. It sees two
//! capabilities, both supplied by the host for the duration of one
//! transaction:
//!
//! - [`WorldState`] — transactional key-value view: point get/put plus an
//!   ordered full-range scan
//! - [`EventSink`] — fire-and-forget event emission scoped to the
//!   transaction
//!
//! [`TransactionContext`] bundles the two and is passed explicitly into
//! every operation. The host guarantees atomicity, isolation, and
//! durability; this crate only defines the contract and ships in-memory
//! fakes ([`InMemoryWorldState`], [`RecordingEventSink`]) for tests and
//! embedding.

pub mod context;
pub mod error;
pub mod memory;
pub mod traits;

pub use context::TransactionContext;
pub use error::{StateError, StateResult};
pub use memory::{InMemoryWorldState, NullEventSink, RecordingEventSink};
pub use traits::{EventSink, RangeScan, ScanEntry, WorldState};
