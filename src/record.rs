//! Recorded-capture ingestion.
//!
//! A capture file is one JSON document describing a single invocation: the
//! action and container display names, an optional recording timestamp, and
//! the materialized result. Recorded captures let declarative scenarios
//! replay assertions long after the harness ran.
//!
//! Two things cannot survive a recording: engine references load as absent,
//! and arguments load as `serde_json::Value` elements, which still compare
//! structurally against JSON-shaped expectations.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::capture::ResultCapture;
use crate::media::MediaType;
use crate::reflect::ArgumentValue;
use crate::result::{
    ActionResult, ArgumentPayload, ContentResult, StatusCodeResult, ViewComponentResult,
    ViewResult,
};
use crate::status::StatusCode;

/// Raw capture document.
#[derive(Debug, Deserialize)]
pub struct CaptureRecord {
    pub action: String,
    pub container: String,
    /// When the harness recorded the invocation, if it said.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    pub result: ResultRecord,
}

/// Raw result payload, tagged by variant.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultRecord {
    StatusCode {
        status_code: u16,
    },
    Content {
        body: String,
        #[serde(default)]
        content_type: Option<String>,
        #[serde(default)]
        status_code: Option<u16>,
    },
    View {
        #[serde(default)]
        view_name: Option<String>,
        #[serde(default)]
        content_type: Option<String>,
        #[serde(default)]
        status_code: Option<u16>,
    },
    ViewComponent {
        #[serde(default)]
        status_code: Option<u16>,
        #[serde(default)]
        content_type: Option<String>,
        #[serde(default)]
        arguments: Option<Value>,
    },
}

impl CaptureRecord {
    /// Convert into the in-memory capture the fluent API asserts on.
    pub fn into_capture(self) -> ResultCapture {
        let result = match self.result {
            ResultRecord::StatusCode { status_code } => ActionResult::StatusCode(StatusCodeResult {
                status_code: StatusCode::from(status_code),
            }),
            ResultRecord::Content {
                body,
                content_type,
                status_code,
            } => ActionResult::Content(ContentResult {
                body,
                content_type: media(content_type),
                status_code: status(status_code),
            }),
            ResultRecord::View {
                view_name,
                content_type,
                status_code,
            } => ActionResult::View(ViewResult {
                view_name,
                view_engine: None,
                content_type: media(content_type),
                status_code: status(status_code),
            }),
            ResultRecord::ViewComponent {
                status_code,
                content_type,
                arguments,
            } => ActionResult::ViewComponent(ViewComponentResult {
                status_code: status(status_code),
                content_type: media(content_type),
                view_engine: None,
                arguments: argument_payload(arguments),
            }),
        };

        ResultCapture::new(self.action, self.container, result)
    }
}

fn media(raw: Option<String>) -> Option<MediaType> {
    raw.map(|raw| MediaType::parse(&raw))
}

fn status(raw: Option<u16>) -> Option<StatusCode> {
    raw.map(StatusCode::from)
}

fn argument_payload(raw: Option<Value>) -> ArgumentPayload {
    match raw {
        None => ArgumentPayload::Sequence(Vec::new()),
        Some(Value::Array(items)) => ArgumentPayload::Sequence(
            items
                .into_iter()
                .map(|item| Box::new(item) as Box<dyn ArgumentValue>)
                .collect(),
        ),
        // Anything but an array is the wrong carrier shape; keep it opaque so
        // the component builder reports it.
        Some(other) => ArgumentPayload::Opaque(Box::new(other)),
    }
}

/// Load a raw capture record from a JSON file.
pub fn load_record(path: &Path) -> Result<CaptureRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read capture file: {:?}", path))?;
    let record: CaptureRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse capture file: {:?}", path))?;
    Ok(record)
}

/// Load a capture file and convert it for assertion.
pub fn load_capture(path: &Path) -> Result<ResultCapture> {
    Ok(load_record(path)?.into_capture())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect;

    #[test]
    fn test_parse_view_component_record() {
        let json = r#"{
            "action": "ListRecent",
            "container": "ReportsController",
            "captured_at": "2024-11-02T09:30:00Z",
            "result": {
                "kind": "view_component",
                "status_code": 500,
                "content_type": "application/xml",
                "arguments": [1, "text"]
            }
        }"#;

        let record: CaptureRecord = serde_json::from_str(json).unwrap();
        assert!(record.captured_at.is_some());

        let capture = record.into_capture();
        assert_eq!(capture.action(), "ListRecent");
        assert_eq!(capture.container(), "ReportsController");

        expect(&capture)
            .view_component()
            .unwrap()
            .with_status_code(500)
            .unwrap()
            .and_also()
            .with_content_type("application/xml")
            .unwrap();
    }

    #[test]
    fn test_recorded_arguments_compare_structurally() {
        let json = r#"{
            "action": "ListRecent",
            "container": "ReportsController",
            "result": {
                "kind": "view_component",
                "arguments": [1, "text"]
            }
        }"#;

        let capture = serde_json::from_str::<CaptureRecord>(json)
            .unwrap()
            .into_capture();

        expect(&capture)
            .view_component()
            .unwrap()
            .with_argument(serde_json::json!("text"))
            .unwrap()
            .with_arguments(vec![
                Box::new(serde_json::json!(1)) as Box<dyn ArgumentValue>,
                Box::new(serde_json::json!("text")) as Box<dyn ArgumentValue>,
            ])
            .unwrap();
    }

    #[test]
    fn test_non_array_arguments_load_as_opaque() {
        let json = r#"{
            "action": "ListRecent",
            "container": "ReportsController",
            "result": {
                "kind": "view_component",
                "arguments": {"unexpected": true}
            }
        }"#;

        let capture = serde_json::from_str::<CaptureRecord>(json)
            .unwrap()
            .into_capture();

        let failure = expect(&capture).view_component().unwrap_err();
        assert_eq!(failure.kind(), crate::FailureKind::InvalidArgumentsType);
    }

    #[test]
    fn test_parse_content_record() {
        let json = r#"{
            "action": "Export",
            "container": "ReportsController",
            "result": {
                "kind": "content",
                "body": "ready",
                "content_type": "text/plain; charset=utf-8"
            }
        }"#;

        let capture = serde_json::from_str::<CaptureRecord>(json)
            .unwrap()
            .into_capture();

        expect(&capture)
            .content()
            .unwrap()
            .with_body("ready")
            .unwrap()
            .with_content_type("text/plain; charset=utf-8")
            .unwrap()
            .with_status_code(200)
            .unwrap();
    }
}
