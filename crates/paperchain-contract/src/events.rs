use std::fmt;

/// State transitions broadcast to external subscribers.
///
/// Wire names are fixed for interoperability with existing consumers. The
/// payload of both events is the full encoded record after the transition,
/// so subscribers never need a follow-up read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordEvent {
    /// A new paper record was registered.
    Created,
    /// An existing record's timestamp was corrected.
    Updated,
}

impl RecordEvent {
    /// The event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "PaperRecordCreated",
            Self::Updated => "PaperRecordUpdated",
        }
    }
}

impl fmt::Display for RecordEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
