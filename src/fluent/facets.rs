//! Shared facet checks.
//!
//! Several result variants carry the same facet (status code, content type,
//! view engine), so the checks live here once and every builder wraps them.
//! Each check runs one comparator and, on mismatch, renders one failure
//! through the message context, nothing else.

use std::any::Any;
use std::sync::Arc;

use crate::engine::ViewEngine;
use crate::failure::{AssertionFailure, FailureKind};
use crate::format::{media_phrase, MessageContext};
use crate::matchers;
use crate::matchers::SequenceComparison;
use crate::media::{ContentTypeExpectation, MediaType};
use crate::reflect::{short_type_name, ArgumentValue};
use crate::status::StatusCode;

pub(crate) fn check_status_code(
    ctx: &MessageContext<'_>,
    expected: StatusCode,
    actual: Option<StatusCode>,
) -> Result<(), AssertionFailure> {
    let actual = matchers::effective_status(actual);
    if expected == actual {
        return Ok(());
    }
    Err(ctx.fail(
        FailureKind::StatusCodeMismatch,
        &format!("to have {} status code", expected),
        &format!("instead received {}", actual),
    ))
}

pub(crate) fn check_content_type(
    ctx: &MessageContext<'_>,
    expected: ContentTypeExpectation,
    actual: Option<&MediaType>,
) -> Result<(), AssertionFailure> {
    let expected = expected.media();
    if matchers::media_type_eq(expected, actual) {
        return Ok(());
    }
    Err(ctx.fail(
        FailureKind::ContentTypeMismatch,
        &format!("content type to be {}", media_phrase(expected)),
        &format!("instead received {}", media_phrase(actual)),
    ))
}

pub(crate) fn check_view_engine(
    ctx: &MessageContext<'_>,
    expected: Option<&Arc<dyn ViewEngine>>,
    actual: Option<&Arc<dyn ViewEngine>>,
) -> Result<(), AssertionFailure> {
    if matchers::same_engine(expected, actual) {
        return Ok(());
    }
    Err(ctx.fail(
        FailureKind::ReferenceMismatch,
        "view engine to be the same as the provided one",
        "instead received a different one",
    ))
}

pub(crate) fn check_view_engine_type<T: ViewEngine>(
    ctx: &MessageContext<'_>,
    actual: Option<&Arc<dyn ViewEngine>>,
) -> Result<(), AssertionFailure> {
    let constraint = format!("view engine to be of {} type", short_type_name::<T>());
    match actual {
        Some(engine) if matchers::engine_is::<T>(engine.as_ref()) => Ok(()),
        Some(engine) => Err(ctx.fail(
            FailureKind::TypeMismatch,
            &constraint,
            &format!("instead received {}", engine.type_label()),
        )),
        None => Err(ctx.fail(
            FailureKind::TypeMismatch,
            &constraint,
            "instead received null",
        )),
    }
}

/// Plain string facet (body, view name): exact equality, absence rendered as
/// `null`.
pub(crate) fn check_text(
    ctx: &MessageContext<'_>,
    facet: &str,
    expected: &str,
    actual: Option<&str>,
) -> Result<(), AssertionFailure> {
    if actual == Some(expected) {
        return Ok(());
    }
    let received = match actual {
        Some(actual) => format!("instead received '{}'", actual),
        None => "instead received null".to_string(),
    };
    Err(ctx.fail(
        FailureKind::ValueMismatch,
        &format!("{} to be '{}'", facet, expected),
        &received,
    ))
}

pub(crate) fn check_argument(
    ctx: &MessageContext<'_>,
    sequence: &[Box<dyn ArgumentValue>],
    expected: &dyn ArgumentValue,
) -> Result<(), AssertionFailure> {
    if matchers::contains_value(sequence, expected) {
        return Ok(());
    }
    Err(ctx.fail(
        FailureKind::ArgumentNotFound,
        "with at least one argument to be the given one",
        "none was found",
    ))
}

pub(crate) fn check_argument_of_type<T: Any>(
    ctx: &MessageContext<'_>,
    sequence: &[Box<dyn ArgumentValue>],
) -> Result<(), AssertionFailure> {
    if matchers::contains_type::<T>(sequence) {
        return Ok(());
    }
    Err(ctx.fail(
        FailureKind::ArgumentNotFound,
        &format!(
            "with at least one argument to be of {} type",
            short_type_name::<T>()
        ),
        "none was found",
    ))
}

pub(crate) fn check_arguments(
    ctx: &MessageContext<'_>,
    expected: &[Box<dyn ArgumentValue>],
    actual: &[Box<dyn ArgumentValue>],
) -> Result<(), AssertionFailure> {
    match matchers::compare_sequences(expected, actual) {
        SequenceComparison::Equal => Ok(()),
        SequenceComparison::CountMismatch { expected, found } => Err(ctx.fail(
            FailureKind::CountMismatch,
            &format!("arguments to have {} items", expected),
            &format!("in fact found {}", found),
        )),
        SequenceComparison::ElementMismatch { index } => Err(ctx.fail(
            FailureKind::PositionalMismatch,
            &format!(
                "to have argument on position {} equal to the given one on the same position",
                index + 1
            ),
            "in fact it was different",
        )),
    }
}
