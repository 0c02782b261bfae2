//! Foundation types for PaperChain.
//!
//! This crate provides the paper-record entity, its content-hash key, and
//! the codec mapping records to the byte values stored in the ledger. Every
//! other PaperChain crate depends on `paperchain-types`.
//!
//! # Key Types
//!
//! - [`PaperRecord`] — an authorship/timestamp claim for one paper
//! - [`PaperHash`] — the paper's content hash, used as the record key
//! - [`encode_record`] / [`decode_record`] — the ledger value codec

pub mod codec;
pub mod error;
pub mod hash;
pub mod record;

pub use codec::{decode_record, encode_record};
pub use error::TypeError;
pub use hash::PaperHash;
pub use record::PaperRecord;
