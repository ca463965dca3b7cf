//! # verdict
//!
//! A fluent assertion engine for validating controller action results.
//!
//! An external harness invokes an action under test and records what came
//! back as a [`ResultCapture`]: the action's display name, the container's
//! display name, and the materialized result object. This library asserts on
//! the shape of that result (status code, content type, view engine,
//! argument list) and renders a deterministic diagnostic when a facet does
//! not match.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict::{arguments, expect, ResultCapture};
//!
//! #[test]
//! fn renders_the_recent_reports_component() -> Result<(), verdict::AssertionFailure> {
//!     let capture: ResultCapture = harness.invoke("ListRecent")?;
//!
//!     expect(&capture)
//!         .view_component()?
//!         .with_status_code(500)?
//!         .and_also()
//!         .with_content_type("application/xml")?
//!         .with_arguments(arguments![1, "text"])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Replaying Recorded Captures
//!
//! ```rust,ignore
//! use verdict::{expect, record};
//!
//! #[test]
//! fn recorded_export_result_still_matches() {
//!     let capture = record::load_capture("captures/export.json".as_ref()).unwrap();
//!
//!     expect(&capture)
//!         .content()
//!         .unwrap()
//!         .with_status_code(200)
//!         .unwrap();
//! }
//! ```

pub mod capture;
pub mod engine;
pub mod failure;
pub mod fluent;
pub mod matchers;
pub mod media;
pub mod record;
pub mod reflect;
pub mod result;
pub mod status;

#[cfg(feature = "yaml")]
pub mod config;
#[cfg(feature = "yaml")]
pub mod discovery;
#[cfg(feature = "yaml")]
pub mod output;
#[cfg(feature = "yaml")]
pub mod scenario;

mod format;

// Core types
pub use capture::ResultCapture;
pub use engine::ViewEngine;
pub use failure::{AssertionFailure, FailureKind};
pub use fluent::{
    expect, ContentAssertion, ResultExpectation, StatusCodeAssertion, ViewAssertion,
    ViewComponentAssertion,
};
pub use media::{ContentTypeExpectation, MediaType};
pub use reflect::{short_type_name, ArgumentValue};
pub use result::{
    ActionResult, ArgumentPayload, ContentResult, StatusCodeResult, ViewComponentResult,
    ViewResult,
};
pub use status::StatusCode;

// Recorded captures
pub use record::{load_capture, CaptureRecord};

// Scenario execution (feature-gated)
#[cfg(feature = "yaml")]
pub use output::{OutputConfig, OutputFormatter, OutputMode};
#[cfg(feature = "yaml")]
pub use scenario::{load_scenario, run_scenario, CheckResult, Scenario};
