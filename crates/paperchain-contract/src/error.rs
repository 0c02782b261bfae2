use paperchain_state::StateError;
use paperchain_types::{PaperHash, TypeError};

/// Errors produced by record-store operations.
///
/// Every variant is returned synchronously to the caller and never retried
/// internally; the host aborts and rolls back the enclosing transaction on
/// any error, so no partial writes become visible. Callers can tell a
/// missing record from an unreadable one from a duplicate submission from
/// an unavailable backend, which is what makes client-side retry logic
/// correct: retry on `Storage`, never on `AlreadyExists` or `NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// A record already exists under this hash; the dedup gate rejected
    /// the submission.
    #[error("paper record with hash {hash} already exists")]
    AlreadyExists { hash: PaperHash },

    /// No record exists under this hash.
    #[error("paper record with hash {hash} does not exist")]
    NotFound { hash: PaperHash },

    /// A record exists but its stored bytes fail to decode.
    #[error("paper record with hash {hash} is unreadable: {reason}")]
    Corrupt { hash: PaperHash, reason: String },

    /// An in-memory record failed to encode before write.
    #[error("failed to encode paper record: {0}")]
    Encoding(String),

    /// The submitted record failed validation before any ledger access.
    #[error("invalid paper record: {0}")]
    InvalidRecord(TypeError),

    /// The underlying read, write, scan, or emission failed.
    #[error(transparent)]
    Storage(#[from] StateError),
}

/// Result alias for record-store operations.
pub type ContractResult<T> = Result<T, ContractError>;
