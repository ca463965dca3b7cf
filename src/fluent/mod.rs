//! Fluent assertion API over captured action results.
//!
//! The entry point is [`expect`], which takes a [`ResultCapture`] produced by
//! the invocation harness and dispatches to the builder matching the
//! captured result variant. Each builder exposes one assertion method per
//! facet of its variant; a method returns the builder again on success and an
//! [`AssertionFailure`](crate::AssertionFailure) on the first mismatch, so
//! chains read naturally with `?`:
//!
//! ```rust,ignore
//! use verdict::{expect, ResultCapture};
//!
//! let capture: ResultCapture = harness.invoke(/* ... */)?;
//!
//! expect(&capture)
//!     .view_component()?
//!     .with_status_code(500)?
//!     .and_also()
//!     .with_content_type("application/xml")?;
//! ```
//!
//! [`ResultCapture`]: crate::ResultCapture

mod content;
mod expectation;
mod facets;
mod status_code;
mod view;
mod view_component;

pub use content::ContentAssertion;
pub use expectation::{expect, ResultExpectation};
pub use status_code::StatusCodeAssertion;
pub use view::ViewAssertion;
pub use view_component::ViewComponentAssertion;
