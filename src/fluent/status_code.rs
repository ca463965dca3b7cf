//! Assertions over bare status-code results.

use crate::capture::ResultCapture;
use crate::failure::AssertionFailure;
use crate::format::MessageContext;
use crate::result::{ActionResult, StatusCodeResult};
use crate::status::StatusCode;

use super::facets;

/// Builder for assertions on a captured status-code result.
#[derive(Debug, Clone, Copy)]
pub struct StatusCodeAssertion<'a> {
    capture: &'a ResultCapture,
    result: &'a StatusCodeResult,
}

impl<'a> StatusCodeAssertion<'a> {
    pub(crate) fn new(
        capture: &'a ResultCapture,
        result: &'a StatusCodeResult,
    ) -> StatusCodeAssertion<'a> {
        StatusCodeAssertion { capture, result }
    }

    /// Assert the status code, given as an integer or a symbolic constant.
    pub fn with_status_code(
        self,
        expected: impl Into<StatusCode>,
    ) -> Result<Self, AssertionFailure> {
        let ctx = MessageContext::for_capture(self.capture);
        facets::check_status_code(&ctx, expected.into(), Some(self.result.status_code))?;
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
