use paperchain_state::RangeScan;
use paperchain_types::{decode_record, PaperHash, PaperRecord};

use crate::error::{ContractError, ContractResult};

/// What to do when a stored entry fails to decode during a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CorruptionPolicy {
    /// Silently skip the entry and keep scanning. Matches the historical
    /// behavior: the listing stays available, but corrupt entries vanish
    /// from it without an error. [`RecordScan::skipped`] exposes how many
    /// entries were dropped so callers can still detect the loss.
    #[default]
    Skip,
    /// Surface a `Corrupt` error for the first unreadable entry.
    Fail,
}

/// Lazy listing of every record in the store.
///
/// Wraps the ledger's full-range cursor, decoding each entry on demand.
/// Finite and non-restartable: each entry is yielded at most once, and the
/// underlying cursor is released when the scan is dropped, on every exit
/// path including early errors. Storage faults always propagate; decode
/// failures follow the configured [`CorruptionPolicy`].
pub struct RecordScan<'a> {
    cursor: RangeScan<'a>,
    policy: CorruptionPolicy,
    skipped: usize,
}

impl<'a> RecordScan<'a> {
    pub(crate) fn new(cursor: RangeScan<'a>, policy: CorruptionPolicy) -> Self {
        Self {
            cursor,
            policy,
            skipped: 0,
        }
    }

    /// Number of corrupt entries silently dropped so far.
    ///
    /// Only meaningful under [`CorruptionPolicy::Skip`]; final once the
    /// iterator is exhausted.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The policy this scan applies to unreadable entries.
    pub fn policy(&self) -> CorruptionPolicy {
        self.policy
    }
}

impl Iterator for RecordScan<'_> {
    type Item = ContractResult<PaperRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, value) = match self.cursor.next()? {
                Ok(entry) => entry,
                Err(fault) => return Some(Err(fault.into())),
            };
            match decode_record(&value) {
                Ok(record) => return Some(Ok(record)),
                Err(err) => match self.policy {
                    CorruptionPolicy::Skip => {
                        self.skipped += 1;
                        tracing::warn!(key = %key, error = %err, "skipping unreadable entry in listing");
                    }
                    CorruptionPolicy::Fail => {
                        return Some(Err(ContractError::Corrupt {
                            hash: PaperHash::new(key),
                            reason: err.to_string(),
                        }))
                    }
                },
            }
        }
    }
}

impl std::fmt::Debug for RecordScan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordScan")
            .field("policy", &self.policy)
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}
