//! Facet comparators.
//!
//! Pure functions with no access to invocation context. Each implements the
//! comparison semantics of one facet class; the fluent layer maps their
//! verdicts onto formatted failures.

use std::any::Any;
use std::sync::Arc;

use crate::engine::ViewEngine;
use crate::media::MediaType;
use crate::reflect::ArgumentValue;
use crate::status::StatusCode;

/// Outcome of comparing two ordered argument sequences.
///
/// A length difference is always reported as `CountMismatch`, even when some
/// positions would also differ; element comparison only runs on sequences of
/// equal length and short-circuits at the first differing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceComparison {
    Equal,
    CountMismatch { expected: usize, found: usize },
    /// First differing index, 0-based.
    ElementMismatch { index: usize },
}

/// A result that carries no status code reports 200 (OK).
pub fn effective_status(actual: Option<StatusCode>) -> StatusCode {
    actual.unwrap_or(StatusCode::OK)
}

/// Component-wise media-type equality. Absence is a distinct value: it only
/// equals absence, never an empty structure.
pub fn media_type_eq(expected: Option<&MediaType>, actual: Option<&MediaType>) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// Reference identity for engine instances, with no structural fallback.
/// Two absent engines count as the same.
pub fn same_engine(
    expected: Option<&Arc<dyn ViewEngine>>,
    actual: Option<&Arc<dyn ViewEngine>>,
) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(expected), Some(actual)) => Arc::ptr_eq(expected, actual),
        _ => false,
    }
}

/// Exact runtime-type check for an engine instance. A subtype-style
/// relationship never satisfies it.
pub fn engine_is<T: ViewEngine>(engine: &dyn ViewEngine) -> bool {
    let any: &dyn Any = engine;
    any.is::<T>()
}

/// Structural presence: at least one element equal to `expected`, at any
/// position.
pub fn contains_value(sequence: &[Box<dyn ArgumentValue>], expected: &dyn ArgumentValue) -> bool {
    sequence.iter().any(|item| expected.value_eq(item.as_ref()))
}

/// Typed presence: at least one element whose runtime type is exactly `T`.
pub fn contains_type<T: Any>(sequence: &[Box<dyn ArgumentValue>]) -> bool {
    sequence.iter().any(|item| item.as_any().is::<T>())
}

/// Ordered-sequence comparison: count first, then index-wise structural
/// equality.
pub fn compare_sequences(
    expected: &[Box<dyn ArgumentValue>],
    actual: &[Box<dyn ArgumentValue>],
) -> SequenceComparison {
    if expected.len() != actual.len() {
        return SequenceComparison::CountMismatch {
            expected: expected.len(),
            found: actual.len(),
        };
    }

    for (index, (expected, actual)) in expected.iter().zip(actual).enumerate() {
        if !expected.value_eq(actual.as_ref()) {
            return SequenceComparison::ElementMismatch { index };
        }
    }

    SequenceComparison::Equal
}
