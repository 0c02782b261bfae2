use crate::error::StateResult;

/// A single key/value pair yielded by a range scan.
pub type ScanEntry = (String, Vec<u8>);

/// Cursor over an ordered key range.
///
/// Lazy, finite, and non-restartable: entries are produced in ascending key
/// order and each entry is yielded at most once. Dropping the scan releases
/// the underlying ledger cursor, on every exit path including early errors.
pub type RangeScan<'a> = Box<dyn Iterator<Item = StateResult<ScanEntry>> + Send + 'a>;

/// Transactional key-value view of the host ledger's world state.
///
/// All implementations must satisfy these invariants:
/// - Every read and write issued through one instance belongs to one
///   atomic, isolated host transaction (read-your-writes within the
///   transaction, all-or-nothing commit).
/// - `get` distinguishes an absent key (`Ok(None)`) from a storage fault.
/// - `range` yields entries in ascending key order; empty bounds denote
///   the full key space.
/// - The adapter never interprets values — it is a pure byte store.
pub trait WorldState: Send + Sync {
    /// Point read. Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Point write under `key`. Overwrites any existing value.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Open an ascending scan over `[start, end)`. An empty `start` means
    /// the beginning of the key space; an empty `end` means its end.
    fn range(&self, start: &str, end: &str) -> StateResult<RangeScan<'_>>;
}

/// Fire-and-forget notification channel scoped to the current transaction.
///
/// The engine writes one event per successful mutation; delivery to
/// subscribers after commit is the host's responsibility. Emission failure
/// is a storage-level fault and aborts the transaction like any other.
pub trait EventSink: Send + Sync {
    fn emit(&self, name: &str, payload: &[u8]) -> StateResult<()>;
}
