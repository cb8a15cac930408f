use thiserror::Error;

/// Parse failures for raw host-machine identifiers.
///
/// Every failure is detected while parsing; a value that constructs
/// successfully never fails downstream. Callers should treat any of these
/// as "no usable identity evidence was present" and continue without
/// identity fields rather than aborting the enclosing emission flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The raw identifier was empty.
    #[error("host identifier is empty")]
    EmptyInput,
    /// A token or segment did not have the expected shape.
    #[error("malformed segment: '{segment}'")]
    MalformedSegment {
        /// Offending token or segment text.
        segment: String,
    },
    /// Grouped input carried more than one distinct system id.
    #[error("system id mismatch: expected '{expected}', found '{found}'")]
    SystemIdMismatch {
        /// System id taken from the first group.
        expected: String,
        /// Disagreeing system id from a later group.
        found: String,
    },
    /// A storage id repeated the system id verbatim, which indicates a
    /// malformed capture.
    #[error("storage id '{value}' repeats the system id")]
    StorageEqualsSystem {
        /// The repeated token.
        value: String,
    },
}
