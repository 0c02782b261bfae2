use thiserror::Error;

/// Errors produced by type and codec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A record failed to encode to its wire form.
    #[error("failed to encode record: {0}")]
    Encode(String),

    /// Stored bytes failed to decode into a record.
    #[error("failed to decode record: {0}")]
    Decode(String),

    /// A required field was empty.
    #[error("empty field: {0}")]
    EmptyField(&'static str),
}
