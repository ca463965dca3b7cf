//! Assertions over view component results.

use std::any::Any;
use std::sync::Arc;

use crate::capture::ResultCapture;
use crate::engine::ViewEngine;
use crate::failure::AssertionFailure;
use crate::format::MessageContext;
use crate::media::ContentTypeExpectation;
use crate::reflect::ArgumentValue;
use crate::result::{ActionResult, ViewComponentResult};
use crate::status::StatusCode;

use super::facets;

/// Builder for assertions on a captured view component result.
///
/// Every method consumes the builder and hands it back on success, so
/// multi-facet chains compose with `?`. The first mismatch ends the chain
/// with an [`AssertionFailure`].
#[derive(Debug, Clone, Copy)]
pub struct ViewComponentAssertion<'a> {
    capture: &'a ResultCapture,
    result: &'a ViewComponentResult,
    arguments: &'a [Box<dyn ArgumentValue>],
}

impl<'a> ViewComponentAssertion<'a> {
    pub(crate) fn new(
        capture: &'a ResultCapture,
        result: &'a ViewComponentResult,
        arguments: &'a [Box<dyn ArgumentValue>],
    ) -> ViewComponentAssertion<'a> {
        ViewComponentAssertion {
            capture,
            result,
            arguments,
        }
    }

    fn ctx(&self) -> MessageContext<'a> {
        MessageContext::for_capture(self.capture)
    }

    /// Assert the status code, given as an integer or a symbolic constant.
    /// A result that carries no code counts as 200 (OK).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// expect(&capture).view_component()?.with_status_code(500)?;
    /// expect(&capture)
    ///     .view_component()?
    ///     .with_status_code(StatusCode::INTERNAL_SERVER_ERROR)?;
    /// ```
    pub fn with_status_code(
        self,
        expected: impl Into<StatusCode>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_status_code(&self.ctx(), expected.into(), self.result.status_code)?;
        Ok(self)
    }

    /// Assert the content type, given as a string, a structured
    /// [`MediaType`](crate::MediaType), or `None` to require absence.
    /// A concrete expectation never matches an absent actual value.
    pub fn with_content_type(
        self,
        expected: impl Into<ContentTypeExpectation>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_content_type(&self.ctx(), expected.into(), self.result.content_type.as_ref())?;
        Ok(self)
    }

    /// Assert the view engine is the same instance as `expected`, or that
    /// both are absent. Identity, not structural equality: an
    /// equivalent-looking engine does not pass.
    pub fn with_view_engine(
        self,
        expected: Option<&Arc<dyn ViewEngine>>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_view_engine(&self.ctx(), expected, self.result.view_engine.as_ref())?;
        Ok(self)
    }

    /// Assert the view engine is present and of exactly type `T`.
    pub fn with_view_engine_of_type<T: ViewEngine>(self) -> Result<Self, AssertionFailure> {
        facets::check_view_engine_type::<T>(&self.ctx(), self.result.view_engine.as_ref())?;
        Ok(self)
    }

    /// Assert at least one argument is structurally equal to `expected`,
    /// at any position.
    pub fn with_argument<T: ArgumentValue>(self, expected: T) -> Result<Self, AssertionFailure> {
        facets::check_argument(&self.ctx(), self.arguments, &expected)?;
        Ok(self)
    }

    /// Assert at least one argument has exactly the runtime type `T`.
    pub fn with_argument_of_type<T: Any>(self) -> Result<Self, AssertionFailure> {
        facets::check_argument_of_type::<T>(&self.ctx(), self.arguments)?;
        Ok(self)
    }

    /// Assert the full ordered argument sequence: the count must match, then
    /// every position must compare structurally equal. Build the expected
    /// sequence with the [`arguments!`](crate::arguments) macro.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use verdict::arguments;
    ///
    /// expect(&capture)
    ///     .view_component()?
    ///     .with_arguments(arguments![1, "text"])?;
    /// ```
    pub fn with_arguments(
        self,
        expected: Vec<Box<dyn ArgumentValue>>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_arguments(&self.ctx(), &expected, self.arguments)?;
        Ok(self)
    }

    /// Chain combinator with no semantic effect; reads well between
    /// assertions.
    pub fn and_also(self) -> Self {
        self
    }

    /// Escape hatch: hand back the captured result for manual inspection.
    /// Returns the same object captured at session start, never a copy.
    pub fn and_provide_the_result(self) -> &'a ActionResult {
        self.capture.result()
    }
}
