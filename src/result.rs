//! The result-object model the assertion builders operate on.
//!
//! [`ActionResult`] is a closed union: each variant carries exactly the
//! facets its builder can assert, and nothing dispatches on facets a variant
//! does not have. The engine never invokes anything; results arrive here
//! already materialized by the external harness.

use std::sync::Arc;

use crate::engine::ViewEngine;
use crate::media::MediaType;
use crate::reflect::ArgumentValue;
use crate::status::StatusCode;

/// One materialized action result, tagged by variant.
#[derive(Debug)]
pub enum ActionResult {
    StatusCode(StatusCodeResult),
    Content(ContentResult),
    View(ViewResult),
    ViewComponent(ViewComponentResult),
}

impl ActionResult {
    /// Display label used as the subject of diagnostic messages.
    pub fn variant_label(&self) -> &'static str {
        match self {
            ActionResult::StatusCode(_) => "status code result",
            ActionResult::Content(_) => "content result",
            ActionResult::View(_) => "view result",
            ActionResult::ViewComponent(_) => "view component result",
        }
    }
}

/// A bare status-code result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeResult {
    pub status_code: StatusCode,
}

/// A raw-content result: a body plus optional metadata.
#[derive(Debug, Default)]
pub struct ContentResult {
    pub body: String,
    pub content_type: Option<MediaType>,
    pub status_code: Option<StatusCode>,
}

/// A rendered-view result.
#[derive(Debug, Default)]
pub struct ViewResult {
    pub view_name: Option<String>,
    pub view_engine: Option<Arc<dyn ViewEngine>>,
    pub status_code: Option<StatusCode>,
    pub content_type: Option<MediaType>,
}

/// A view-component result, including its invocation arguments.
#[derive(Debug, Default)]
pub struct ViewComponentResult {
    pub status_code: Option<StatusCode>,
    pub content_type: Option<MediaType>,
    pub view_engine: Option<Arc<dyn ViewEngine>>,
    pub arguments: ArgumentPayload,
}

/// The carrier a component's arguments arrived in.
///
/// Argument assertions require the ordered `Sequence` shape; any other
/// payload is `Opaque` and surfaces as an invalid-arguments failure when the
/// component builder is selected.
#[derive(Debug)]
pub enum ArgumentPayload {
    Sequence(Vec<Box<dyn ArgumentValue>>),
    Opaque(Box<dyn ArgumentValue>),
}

impl Default for ArgumentPayload {
    fn default() -> Self {
        ArgumentPayload::Sequence(Vec::new())
    }
}

impl From<StatusCodeResult> for ActionResult {
    fn from(result: StatusCodeResult) -> Self {
        ActionResult::StatusCode(result)
    }
}

impl From<ContentResult> for ActionResult {
    fn from(result: ContentResult) -> Self {
        ActionResult::Content(result)
    }
}

impl From<ViewResult> for ActionResult {
    fn from(result: ViewResult) -> Self {
        ActionResult::View(result)
    }
}

impl From<ViewComponentResult> for ActionResult {
    fn from(result: ViewComponentResult) -> Self {
        ActionResult::ViewComponent(result)
    }
}
