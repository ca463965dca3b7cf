//! Captured invocation context supplied by the external harness.

use crate::result::ActionResult;

/// Everything one assertion chain needs: the display name of the invoked
/// action, the display name of the container under test, and the
/// materialized result.
///
/// The harness constructs a capture once; every assertion afterwards is a
/// pure read. One chain owns one capture exclusively for its lifetime, so
/// concurrent chains over different captures need no coordination.
#[derive(Debug)]
pub struct ResultCapture {
    action: String,
    container: String,
    result: ActionResult,
}

impl ResultCapture {
    /// Record a completed invocation. Names are never abbreviated in
    /// diagnostics, so pass them exactly as they should read in messages.
    pub fn new(
        action: impl Into<String>,
        container: impl Into<String>,
        result: ActionResult,
    ) -> ResultCapture {
        ResultCapture {
            action: action.into(),
            container: container.into(),
            result,
        }
    }

    /// Display name of the invoked action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Display name of the containing unit.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// The captured result object.
    pub fn result(&self) -> &ActionResult {
        &self.result
    }
}
