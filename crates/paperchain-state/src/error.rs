/// Errors from the underlying ledger adapter.
///
/// Any variant means the storage layer itself failed; the host treats these
/// as cause to abort the enclosing transaction.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The backing store reported a fault (transaction error, lock
    /// poisoning, remote ledger failure).
    #[error("state backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Event emission was rejected by the host.
    #[error("event emission failed: {0}")]
    EventDelivery(String),
}

/// Result alias for ledger-adapter operations.
pub type StateResult<T> = Result<T, StateError>;
