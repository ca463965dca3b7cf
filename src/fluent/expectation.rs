//! Entry point: dispatch a captured result to its variant builder.

use crate::capture::ResultCapture;
use crate::failure::{AssertionFailure, FailureKind};
use crate::format::MessageContext;
use crate::result::{ActionResult, ArgumentPayload};

use super::content::ContentAssertion;
use super::status_code::StatusCodeAssertion;
use super::view::ViewAssertion;
use super::view_component::ViewComponentAssertion;

/// Create an expectation over a captured result.
///
/// This is the entry point of the fluent API. Select the builder matching
/// the result variant the action should have produced; selecting the wrong
/// one fails with the same diagnostic vocabulary as any facet mismatch.
///
/// # Example
///
/// ```rust,ignore
/// use verdict::expect;
///
/// expect(&capture)
///     .view_component()?
///     .with_status_code(500)?;
/// ```
pub fn expect(capture: &ResultCapture) -> ResultExpectation<'_> {
    ResultExpectation { capture }
}

/// Holds a capture and selects the builder for one result variant.
#[derive(Debug, Clone, Copy)]
pub struct ResultExpectation<'a> {
    capture: &'a ResultCapture,
}

impl<'a> ResultExpectation<'a> {
    /// Assert the result is a bare status-code result.
    pub fn status_code(self) -> Result<StatusCodeAssertion<'a>, AssertionFailure> {
        match self.capture.result() {
            ActionResult::StatusCode(result) => Ok(StatusCodeAssertion::new(self.capture, result)),
            other => Err(self.variant_mismatch("status code result", other)),
        }
    }

    /// Assert the result is a content result.
    pub fn content(self) -> Result<ContentAssertion<'a>, AssertionFailure> {
        match self.capture.result() {
            ActionResult::Content(result) => Ok(ContentAssertion::new(self.capture, result)),
            other => Err(self.variant_mismatch("content result", other)),
        }
    }

    /// Assert the result is a view result.
    pub fn view(self) -> Result<ViewAssertion<'a>, AssertionFailure> {
        match self.capture.result() {
            ActionResult::View(result) => Ok(ViewAssertion::new(self.capture, result)),
            other => Err(self.variant_mismatch("view result", other)),
        }
    }

    /// Assert the result is a view component result.
    ///
    /// The argument carrier is validated here, before any argument method
    /// runs: a payload that is not an ordered sequence fails immediately with
    /// an invalid-arguments diagnostic naming the actual payload type.
    pub fn view_component(self) -> Result<ViewComponentAssertion<'a>, AssertionFailure> {
        match self.capture.result() {
            ActionResult::ViewComponent(result) => match &result.arguments {
                ArgumentPayload::Sequence(items) => {
                    Ok(ViewComponentAssertion::new(self.capture, result, items))
                }
                ArgumentPayload::Opaque(value) => {
                    let ctx = MessageContext::for_capture(self.capture);
                    Err(ctx.fail(
                        FailureKind::InvalidArgumentsType,
                        "arguments to be a sequence of values",
                        &format!("instead received {}", value.type_label()),
                    ))
                }
            },
            other => Err(self.variant_mismatch("view component result", other)),
        }
    }

    fn variant_mismatch(&self, expected: &str, actual: &ActionResult) -> AssertionFailure {
        let ctx = MessageContext {
            action: self.capture.action(),
            container: self.capture.container(),
            subject: "action result",
        };
        ctx.fail(
            FailureKind::TypeMismatch,
            &format!("to be {}", expected),
            &format!("instead received {}", actual.variant_label()),
        )
    }
}
