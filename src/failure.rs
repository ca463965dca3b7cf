//! Assertion failure surface.

use thiserror::Error;

/// Classification of an assertion failure.
///
/// Every failure a chain can produce belongs to exactly one kind; wrong-value
/// and wrong-shape mismatches share this vocabulary so callers never see an
/// internal fault leak through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    StatusCodeMismatch,
    ContentTypeMismatch,
    ReferenceMismatch,
    TypeMismatch,
    ArgumentNotFound,
    InvalidArgumentsType,
    CountMismatch,
    PositionalMismatch,
    ValueMismatch,
}

/// A failed assertion.
///
/// `Display` is the full diagnostic message; the message text is part of the
/// crate's contract and is asserted verbatim in tests. A failure terminates
/// its chain immediately; there is no aggregation and no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    kind: FailureKind,
    message: String,
}

impl AssertionFailure {
    pub(crate) fn new(kind: FailureKind, message: String) -> AssertionFailure {
        AssertionFailure { kind, message }
    }

    /// Which comparison failed.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The formatted diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
