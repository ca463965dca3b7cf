//! Assertions over view results.

use std::sync::Arc;

use crate::capture::ResultCapture;
use crate::engine::ViewEngine;
use crate::failure::AssertionFailure;
use crate::format::MessageContext;
use crate::media::ContentTypeExpectation;
use crate::result::{ActionResult, ViewResult};
use crate::status::StatusCode;

use super::facets;

/// Builder for assertions on a captured view result.
#[derive(Debug, Clone, Copy)]
pub struct ViewAssertion<'a> {
    capture: &'a ResultCapture,
    result: &'a ViewResult,
}

impl<'a> ViewAssertion<'a> {
    pub(crate) fn new(capture: &'a ResultCapture, result: &'a ViewResult) -> ViewAssertion<'a> {
        ViewAssertion { capture, result }
    }

    fn ctx(&self) -> MessageContext<'a> {
        MessageContext::for_capture(self.capture)
    }

    /// Assert the name of the rendered view.
    pub fn with_view_name(self, expected: &str) -> Result<Self, AssertionFailure> {
        facets::check_text(
            &self.ctx(),
            "view name",
            expected,
            self.result.view_name.as_deref(),
        )?;
        Ok(self)
    }

    /// Assert the view engine is the same instance as `expected`, or that
    /// both are absent.
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

    /// Assert the status code; a result that carries none counts as 200 (OK).
    pub fn with_status_code(
        self,
        expected: impl Into<StatusCode>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_status_code(&self.ctx(), expected.into(), self.result.status_code)?;
        Ok(self)
    }

    /// Assert the content type; `None` requires absence.
    pub fn with_content_type(
        self,
        expected: impl Into<ContentTypeExpectation>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_content_type(&self.ctx(), expected.into(), self.result.content_type.as_ref())?;
        Ok(self)
    }

    /// Chain combinator with no semantic effect.
    pub fn and_also(self) -> Self {
        self
    }

    /// Escape hatch returning the captured result itself.
    pub fn and_provide_the_result(self) -> &'a ActionResult {
        self.capture.result()
    }
}
