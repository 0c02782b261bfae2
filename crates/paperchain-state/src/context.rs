use crate::traits::{EventSink, WorldState};

/// Host-supplied capability bundle for one transactional invocation.
///
/// Every engine operation receives a `TransactionContext` explicitly; the
/// engine holds no ambient or global ledger handle. This keeps the engine
/// stateless between calls and testable against in-memory fakes wired into
/// the same context shape the production host provides.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    state: &'a dyn WorldState,
    events: &'a dyn EventSink,
}

impl<'a> TransactionContext<'a> {
    /// Bundle a world-state view and an event sink for one transaction.
    pub fn new(state: &'a dyn WorldState, events: &'a dyn EventSink) -> Self {
        Self { state, events }
    }

    /// The transactional world-state view.
    pub fn state(&self) -> &'a dyn WorldState {
        self.state
    }

    /// The transaction-scoped event sink.
    pub fn events(&self) -> &'a dyn EventSink {
        self.events
    }
}

impl std::fmt::Debug for TransactionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionContext").finish_non_exhaustive()
    }
}
