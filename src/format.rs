//! Diagnostic message rendering.
//!
//! Every failure kind renders through one fixed template:
//! `When calling {action} action in {container} expected {subject}
//! {constraint-phrase}, but {actual-phrase}.`
//!
//! The context is passed in explicitly, never read from ambient state, so
//! rendering stays a pure function of its inputs.

use crate::capture::ResultCapture;
use crate::failure::{AssertionFailure, FailureKind};
use crate::media::MediaType;

/// Invocation context threaded through every facet check.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MessageContext<'a> {
    pub action: &'a str,
    pub container: &'a str,
    /// Subject of the sentence, usually the result's variant label.
    pub subject: &'a str,
}

impl<'a> MessageContext<'a> {
    /// Context for assertions over a captured result.
    pub fn for_capture(capture: &'a ResultCapture) -> MessageContext<'a> {
        MessageContext {
            action: capture.action(),
            container: capture.container(),
            subject: capture.result().variant_label(),
        }
    }

    /// Render a failure from the fixed template.
    pub fn fail(&self, kind: FailureKind, constraint: &str, actual: &str) -> AssertionFailure {
        AssertionFailure::new(
            kind,
            format!(
                "When calling {} action in {} expected {} {}, but {}.",
                self.action, self.container, self.subject, constraint, actual
            ),
        )
    }
}

/// `'application/json'` for a present media type, `null` for an absent one.
pub(crate) fn media_phrase(value: Option<&MediaType>) -> String {
    match value {
        Some(media) => format!("'{}'", media),
        None => "null".to_string(),
    }
}
