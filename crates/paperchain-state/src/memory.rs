use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Mutex, RwLock};

use crate::error::{StateError, StateResult};
use crate::traits::{EventSink, RangeScan, ScanEntry, WorldState};

/// In-memory, `BTreeMap`-based world state.
///
/// Intended for tests and embedding. Keys are held in sorted order so range
/// scans come back ascending, matching the host ledger's contract. Each call
/// is individually atomic; tests that need transaction-abort behavior drive
/// it from the outside by discarding the instance.
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.read_entries().map(|m| m.len()).unwrap_or(0)
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all keys.
    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.read_entries()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read_entries(
        &self,
    ) -> StateResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .read()
            .map_err(|_| StateError::Backend("world state lock poisoned".into()))
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.read_entries()?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StateError::Backend("world state lock poisoned".into()))?;
        map.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn range(&self, start: &str, end: &str) -> StateResult<RangeScan<'_>> {
        let map = self.read_entries()?;
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_owned())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_owned())
        };
        // Snapshot the range so the cursor owns its entries and the lock is
        // released before the scan is consumed.
        let entries: Vec<ScanEntry> = map
            .range((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Box::new(entries.into_iter().map(Ok)))
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWorldState")
            .field("key_count", &self.len())
            .finish()
    }
}

/// Event sink that records every emission for test assertions.
pub struct RecordingEventSink {
    emitted: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingEventSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self {
            emitted: Mutex::new(Vec::new()),
        }
    }

    /// All emissions so far, in order.
    pub fn emitted(&self) -> Vec<(String, Vec<u8>)> {
        self.emitted
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Event names in emission order.
    pub fn names(&self) -> Vec<String> {
        self.emitted()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.emitted.lock().map(|v| v.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, name: &str, payload: &[u8]) -> StateResult<()> {
        let mut emitted = self
            .emitted
            .lock()
            .map_err(|_| StateError::EventDelivery("recording sink lock poisoned".into()))?;
        emitted.push((name.to_owned(), payload.to_vec()));
        Ok(())
    }
}

impl std::fmt::Debug for RecordingEventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingEventSink")
            .field("event_count", &self.len())
            .finish()
    }
}

/// Event sink that discards every emission.
///
/// For hosts or tests that do not observe events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&self, _name: &str, _payload: &[u8]) -> StateResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Point reads and writes
    // -----------------------------------------------------------------------

    #[test]
    fn get_missing_key_returns_none() {
        let state = InMemoryWorldState::new();
        assert!(state.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_then_get_returns_value() {
        let state = InMemoryWorldState::new();
        state.put("k1", b"v1").unwrap();
        assert_eq!(state.get("k1").unwrap().as_deref(), Some(&b"v1"[..]));
    }

    #[test]
    fn put_overwrites_existing_value() {
        let state = InMemoryWorldState::new();
        state.put("k1", b"old").unwrap();
        state.put("k1", b"new").unwrap();
        assert_eq!(state.get("k1").unwrap().as_deref(), Some(&b"new"[..]));
        assert_eq!(state.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Range scans
    // -----------------------------------------------------------------------

    #[test]
    fn full_range_yields_all_entries_ascending() {
        let state = InMemoryWorldState::new();
        state.put("c", b"3").unwrap();
        state.put("a", b"1").unwrap();
        state.put("b", b"2").unwrap();

        let keys: Vec<String> = state
            .range("", "")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn bounded_range_excludes_end() {
        let state = InMemoryWorldState::new();
        for key in ["a", "b", "c", "d"] {
            state.put(key, b"x").unwrap();
        }

        let keys: Vec<String> = state
            .range("b", "d")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn range_over_empty_state_is_empty() {
        let state = InMemoryWorldState::new();
        assert_eq!(state.range("", "").unwrap().count(), 0);
    }

    #[test]
    fn scan_is_a_snapshot() {
        let state = InMemoryWorldState::new();
        state.put("a", b"1").unwrap();
        let scan = state.range("", "").unwrap();
        state.put("b", b"2").unwrap();
        // The open cursor does not see writes made after it was opened.
        assert_eq!(scan.count(), 1);
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    #[test]
    fn len_is_empty_and_clear() {
        let state = InMemoryWorldState::new();
        assert!(state.is_empty());
        state.put("k", b"v").unwrap();
        assert_eq!(state.len(), 1);
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let state = InMemoryWorldState::new();
        state.put("z", b"").unwrap();
        state.put("a", b"").unwrap();
        assert_eq!(state.keys(), vec!["a", "z"]);
    }

    // -----------------------------------------------------------------------
    // Event sinks
    // -----------------------------------------------------------------------

    #[test]
    fn recording_sink_captures_in_order() {
        let sink = RecordingEventSink::new();
        sink.emit("First", b"1").unwrap();
        sink.emit("Second", b"2").unwrap();

        assert_eq!(sink.names(), vec!["First", "Second"]);
        assert_eq!(sink.emitted()[1].1, b"2");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let sink = NullEventSink;
        sink.emit("Ignored", b"payload").unwrap();
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(InMemoryWorldState::new());
        state.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    let value = state.get("shared").unwrap();
                    assert_eq!(value.as_deref(), Some(&b"data"[..]));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
