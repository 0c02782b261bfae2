use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::PaperHash;

/// An authorship/timestamp claim for one paper, keyed by its content hash.
///
/// Wire field names are fixed for interoperability with existing ledger
/// consumers; all fields are string-typed. Once created, every field except
/// `timestamp` is immutable — timestamp correction is the only sanctioned
/// mutation, and it goes through [`PaperRecord::with_timestamp`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaperRecord {
    /// Identifier of the submitting student.
    #[serde(rename = "studentId")]
    pub student_id: String,
    /// Content hash of the paper; the record's primary key.
    #[serde(rename = "paperHash")]
    pub paper_hash: PaperHash,
    /// Registration time of the claim. The only mutable field.
    pub timestamp: String,
    /// Display name of the author.
    pub author: String,
    /// Identifier of the author.
    #[serde(rename = "authorId")]
    pub author_id: String,
    /// Date of the paper itself, distinct from the registration time.
    #[serde(rename = "paperDate")]
    pub paper_date: String,
}

impl PaperRecord {
    /// Assemble a record from its claim fields.
    pub fn new(
        student_id: impl Into<String>,
        paper_hash: impl Into<PaperHash>,
        timestamp: impl Into<String>,
        author: impl Into<String>,
        author_id: impl Into<String>,
        paper_date: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            paper_hash: paper_hash.into(),
            timestamp: timestamp.into(),
            author: author.into(),
            author_id: author_id.into(),
            paper_date: paper_date.into(),
        }
    }

    /// Copy of this record with a corrected timestamp.
    ///
    /// All identity fields carry through unchanged; this is the only path
    /// by which a stored record may differ from its created form.
    pub fn with_timestamp(&self, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paper {} by {} ({})",
            self.paper_hash.short(),
            self.author,
            self.timestamp
        )
    }
}
