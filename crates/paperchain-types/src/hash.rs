use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content hash of a paper, used as the record's primary key.
///
/// The ledger treats the hash as an opaque string key; callers may supply
/// any externally computed digest verbatim via [`PaperHash::new`]. When the
/// caller holds the paper bytes themselves, [`PaperHash::derive`] produces a
/// hex-encoded BLAKE3 digest, giving identical content an identical key and
/// making the store content-addressed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaperHash(String);

impl PaperHash {
    /// Wrap an externally supplied hash string.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Compute a `PaperHash` from the paper's content bytes.
    pub fn derive(content: &[u8]) -> Self {
        Self(hex::encode(blake3::hash(content).as_bytes()))
    }

    /// The hash as a ledger key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that the hash is usable as a ledger key.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.0.is_empty() {
            return Err(TypeError::EmptyField("paperHash"));
        }
        Ok(())
    }

    /// Short prefix for log output (up to 8 characters).
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Debug for PaperHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaperHash({})", self.short())
    }
}

impl fmt::Display for PaperHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PaperHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PaperHash {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
