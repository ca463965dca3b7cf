//! Assertions over content results.

use crate::capture::ResultCapture;
use crate::failure::AssertionFailure;
use crate::format::MessageContext;
use crate::media::ContentTypeExpectation;
use crate::result::{ActionResult, ContentResult};
use crate::status::StatusCode;

use super::facets;

/// Builder for assertions on a captured content result.
#[derive(Debug, Clone, Copy)]
pub struct ContentAssertion<'a> {
    capture: &'a ResultCapture,
    result: &'a ContentResult,
}

impl<'a> ContentAssertion<'a> {
    pub(crate) fn new(
        capture: &'a ResultCapture,
        result: &'a ContentResult,
    ) -> ContentAssertion<'a> {
        ContentAssertion { capture, result }
    }

    fn ctx(&self) -> MessageContext<'a> {
        MessageContext::for_capture(self.capture)
    }

    /// Assert the response body, compared as an exact string.
    pub fn with_body(self, expected: &str) -> Result<Self, AssertionFailure> {
        facets::check_text(&self.ctx(), "body", expected, Some(&self.result.body))?;
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

    /// Assert the status code; a result that carries none counts as 200 (OK).
    pub fn with_status_code(
        self,
        expected: impl Into<StatusCode>,
    ) -> Result<Self, AssertionFailure> {
        facets::check_status_code(&self.ctx(), expected.into(), self.result.status_code)?;
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
