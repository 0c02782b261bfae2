use paperchain_state::TransactionContext;
use paperchain_types::{decode_record, encode_record, PaperHash, PaperRecord};
use tracing::{debug, info};

use crate::error::{ContractError, ContractResult};
use crate::events::RecordEvent;
use crate::scan::{CorruptionPolicy, RecordScan};

/// The record-store engine.
///
/// Stateless between calls: every operation rehydrates from the ledger via
/// the [`TransactionContext`] it receives, performs its read-check-write
/// sequence inside that one host transaction, and returns. The host's
/// transaction isolation is what makes the check-then-act sequences safe
/// against concurrent callers; the engine takes no locks of its own and
/// only ever writes the single key it operates on.
///
/// The only configuration is the [`CorruptionPolicy`] applied to listings.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaperContract {
    policy: CorruptionPolicy,
}

impl PaperContract {
    /// Engine with the default listing policy ([`CorruptionPolicy::Skip`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit listing policy.
    pub fn with_policy(policy: CorruptionPolicy) -> Self {
        Self { policy }
    }

    /// The listing policy in effect.
    pub fn policy(&self) -> CorruptionPolicy {
        self.policy
    }

    /// Register a new authorship claim under the record's content hash.
    ///
    /// This is the dedup gate that makes the store content-addressed: if
    /// any record already exists under the hash, the submission fails with
    /// `AlreadyExists` whether or not the claim differs, guaranteeing at
    /// most one claim per paper content. On success the encoded record is
    /// written and a `PaperRecordCreated` event carries it to subscribers.
    pub fn create_paper_record(
        &self,
        ctx: &TransactionContext<'_>,
        record: PaperRecord,
    ) -> ContractResult<()> {
        record
            .paper_hash
            .validate()
            .map_err(ContractError::InvalidRecord)?;

        let key = record.paper_hash.as_str();
        if ctx.state().get(key)?.is_some() {
            return Err(ContractError::AlreadyExists {
                hash: record.paper_hash.clone(),
            });
        }

        let bytes = encode_record(&record).map_err(|e| ContractError::Encoding(e.to_string()))?;
        ctx.state().put(key, &bytes)?;
        ctx.events().emit(RecordEvent::Created.name(), &bytes)?;

        info!(hash = record.paper_hash.short(), "paper record created");
        Ok(())
    }

    /// Retrieve the record stored under `hash`.
    ///
    /// `NotFound` if the key is absent; `Corrupt` if the stored bytes fail
    /// to decode. The distinction lets callers separate "never registered"
    /// from "registered but unreadable".
    pub fn get_paper_record(
        &self,
        ctx: &TransactionContext<'_>,
        hash: &PaperHash,
    ) -> ContractResult<PaperRecord> {
        debug!(hash = hash.short(), "reading paper record");
        let bytes = ctx
            .state()
            .get(hash.as_str())?
            .ok_or_else(|| ContractError::NotFound { hash: hash.clone() })?;
        decode_record(&bytes).map_err(|e| ContractError::Corrupt {
            hash: hash.clone(),
            reason: e.to_string(),
        })
    }

    /// Report whether a record exists under `hash`.
    ///
    /// Existence check only — the stored bytes are never decoded, so a
    /// corrupt record still verifies as present. Only an underlying read
    /// fault can fail this operation.
    pub fn verify_paper_record(
        &self,
        ctx: &TransactionContext<'_>,
        hash: &PaperHash,
    ) -> ContractResult<bool> {
        Ok(ctx.state().get(hash.as_str())?.is_some())
    }

    /// Correct the timestamp of an existing record.
    ///
    /// Every other field carries through unchanged; rewriting authorship or
    /// paper identity through this path is deliberately impossible. Emits a
    /// `PaperRecordUpdated` event with the full post-update encoding.
    pub fn update_paper_record(
        &self,
        ctx: &TransactionContext<'_>,
        hash: &PaperHash,
        new_timestamp: &str,
    ) -> ContractResult<()> {
        let existing = self.get_paper_record(ctx, hash)?;
        let updated = existing.with_timestamp(new_timestamp);

        let bytes = encode_record(&updated).map_err(|e| ContractError::Encoding(e.to_string()))?;
        ctx.state().put(hash.as_str(), &bytes)?;
        ctx.events().emit(RecordEvent::Updated.name(), &bytes)?;

        info!(hash = hash.short(), "paper record timestamp updated");
        Ok(())
    }

    /// Enumerate every record in the store.
    ///
    /// Opens a full ascending scan over the whole key space and returns a
    /// lazy [`RecordScan`]. Unreadable entries follow the engine's
    /// [`CorruptionPolicy`]; storage faults always propagate.
    pub fn get_all_paper_records<'a>(
        &self,
        ctx: &TransactionContext<'a>,
    ) -> ContractResult<RecordScan<'a>> {
        debug!("opening full record scan");
        let cursor = ctx.state().range("", "")?;
        Ok(RecordScan::new(cursor, self.policy))
    }

    /// Bootstrap hook invoked once when the store is installed.
    ///
    /// Deliberately a no-op: no seed data is created.
    pub fn init_ledger(&self, _ctx: &TransactionContext<'_>) -> ContractResult<()> {
        info!("ledger bootstrap hook invoked; no seed data");
        Ok(())
    }
}
