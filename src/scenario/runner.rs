//! Scenario execution using the fluent API.
//!
//! This is a thin adapter: every declared expectation becomes a fluent API
//! call, and the formatted failure message becomes the reported reason. The
//! runner collects all outcomes rather than stopping at the first failure,
//! which is what a report wants; the fluent API itself stays fail-fast.

use regex::Regex;

use crate::capture::ResultCapture;
use crate::failure::AssertionFailure;
use crate::fluent::expect;
use crate::media::ContentTypeExpectation;
use crate::reflect::ArgumentValue;
use crate::result::ActionResult;

use super::parser::{parse_variant_name, BodyExpectation, Scenario, VariantName};

/// Result of evaluating a single declared check.
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Check passed.
    Pass,
    /// Check failed with reason.
    Fail { reason: String },
}

impl CheckResult {
    /// Check if this result is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// Check if this result is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }
}

fn check<T>(outcome: Result<T, AssertionFailure>) -> CheckResult {
    match outcome {
        Ok(_) => CheckResult::Pass,
        Err(failure) => CheckResult::Fail {
            reason: failure.to_string(),
        },
    }
}

fn unsupported(facet: &str, capture: &ResultCapture) -> CheckResult {
    CheckResult::Fail {
        reason: format!(
            "{} does not carry a {} facet",
            capture.result().variant_label(),
            facet
        ),
    }
}

/// Run a scenario against a capture and collect every check outcome.
///
/// # Example
///
/// ```rust,ignore
/// let scenario = load_scenario(Path::new("export.yaml"))?;
/// let capture = load_capture(Path::new("export.json"))?;
///
/// for (description, result) in run_scenario(&scenario, &capture) {
///     match result {
///         CheckResult::Pass => println!("ok: {}", description),
///         CheckResult::Fail { reason } => println!("failed: {} - {}", description, reason),
///     }
/// }
/// ```
pub fn run_scenario(scenario: &Scenario, capture: &ResultCapture) -> Vec<(String, CheckResult)> {
    let mut results = Vec::new();
    let declared = &scenario.expect;

    if let Some(raw) = &declared.result {
        results.push((format!("result is {}", raw), check_variant(raw, capture)));
    }

    if let Some(code) = declared.status_code {
        results.push((
            format!("status code is {}", code),
            check_status(capture, code),
        ));
    }

    if let Some(content_type) = &declared.content_type {
        let description = match content_type {
            Some(value) => format!("content type is '{}'", value),
            None => "content type is null".to_string(),
        };
        results.push((
            description,
            check_content_type(capture, content_type.as_deref()),
        ));
    }

    if let Some(view_name) = &declared.view_name {
        results.push((
            format!("view name is '{}'", view_name),
            check_view_name(capture, view_name),
        ));
    }

    if let Some(body) = &declared.body {
        body_checks(capture, body, &mut results);
    }

    if let Some(arguments) = &declared.arguments {
        results.push((
            format!("arguments have {} items in order", arguments.len()),
            check_arguments(capture, arguments),
        ));
    }

    if let Some(argument) = &declared.has_argument {
        results.push(check_has_argument(capture, argument));
    }

    results
}

fn check_variant(raw: &str, capture: &ResultCapture) -> CheckResult {
    let declared = match parse_variant_name(raw) {
        Ok(variant) => variant,
        Err(error) => {
            return CheckResult::Fail {
                reason: error.to_string(),
            }
        }
    };

    // Route through the fluent selectors so the reason reads exactly like a
    // library failure.
    let outcome = match declared {
        VariantName::StatusCode => expect(capture).status_code().map(|_| ()),
        VariantName::Content => expect(capture).content().map(|_| ()),
        VariantName::View => expect(capture).view().map(|_| ()),
        VariantName::ViewComponent => expect(capture).view_component().map(|_| ()),
    };
    check(outcome)
}

fn check_status(capture: &ResultCapture, code: u16) -> CheckResult {
    let outcome = match capture.result() {
        ActionResult::StatusCode(_) => expect(capture)
            .status_code()
            .and_then(|builder| builder.with_status_code(code))
            .map(|_| ()),
        ActionResult::Content(_) => expect(capture)
            .content()
            .and_then(|builder| builder.with_status_code(code))
            .map(|_| ()),
        ActionResult::View(_) => expect(capture)
            .view()
            .and_then(|builder| builder.with_status_code(code))
            .map(|_| ()),
        ActionResult::ViewComponent(_) => expect(capture)
            .view_component()
            .and_then(|builder| builder.with_status_code(code))
            .map(|_| ()),
    };
    check(outcome)
}

fn check_content_type(capture: &ResultCapture, expected: Option<&str>) -> CheckResult {
    let expected = ContentTypeExpectation::from(expected);
    let outcome = match capture.result() {
        ActionResult::Content(_) => expect(capture)
            .content()
            .and_then(|builder| builder.with_content_type(expected))
            .map(|_| ()),
        ActionResult::View(_) => expect(capture)
            .view()
            .and_then(|builder| builder.with_content_type(expected))
            .map(|_| ()),
        ActionResult::ViewComponent(_) => expect(capture)
            .view_component()
            .and_then(|builder| builder.with_content_type(expected))
            .map(|_| ()),
        ActionResult::StatusCode(_) => return unsupported("content type", capture),
    };
    check(outcome)
}

fn check_view_name(capture: &ResultCapture, expected: &str) -> CheckResult {
    match capture.result() {
        ActionResult::View(_) => check(
            expect(capture)
                .view()
                .and_then(|builder| builder.with_view_name(expected)),
        ),
        _ => unsupported("view name", capture),
    }
}

fn body_checks(
    capture: &ResultCapture,
    expectation: &BodyExpectation,
    results: &mut Vec<(String, CheckResult)>,
) {
    let body = match capture.result() {
        ActionResult::Content(content) => Some(content.body.as_str()),
        _ => None,
    };

    if let Some(expected) = &expectation.equals {
        let outcome = match body {
            Some(_) => check(
                expect(capture)
                    .content()
                    .and_then(|builder| builder.with_body(expected)),
            ),
            None => unsupported("body", capture),
        };
        results.push((format!("body equals '{}'", expected), outcome));
    }

    for pattern in &expectation.contains {
        results.push((
            format!("body contains '{}'", pattern),
            match body {
                Some(body) if body.contains(pattern.as_str()) => CheckResult::Pass,
                Some(_) => CheckResult::Fail {
                    reason: format!("body does not contain '{}'", pattern),
                },
                None => unsupported("body", capture),
            },
        ));
    }

    for pattern in &expectation.not_contains {
        results.push((
            format!("body not contains '{}'", pattern),
            match body {
                Some(body) if body.contains(pattern.as_str()) => CheckResult::Fail {
                    reason: format!("body contains '{}' but should not", pattern),
                },
                Some(_) => CheckResult::Pass,
                None => unsupported("body", capture),
            },
        ));
    }

    for pattern in &expectation.matches {
        results.push((
            format!("body matches '{}'", pattern),
            regex_check(body, pattern, true, capture),
        ));
    }

    for pattern in &expectation.not_matches {
        results.push((
            format!("body not matches '{}'", pattern),
            regex_check(body, pattern, false, capture),
        ));
    }
}

fn regex_check(
    body: Option<&str>,
    pattern: &str,
    should_match: bool,
    capture: &ResultCapture,
) -> CheckResult {
    let body = match body {
        Some(body) => body,
        None => return unsupported("body", capture),
    };
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => {
            return CheckResult::Fail {
                reason: format!("invalid regex '{}': {}", pattern, error),
            }
        }
    };

    match (regex.is_match(body), should_match) {
        (true, true) | (false, false) => CheckResult::Pass,
        (false, true) => CheckResult::Fail {
            reason: format!("body does not match pattern '{}'", pattern),
        },
        (true, false) => CheckResult::Fail {
            reason: format!("body matches pattern '{}' but should not", pattern),
        },
    }
}

/// Convert a declared YAML value into the JSON domain recorded captures use.
fn to_argument(value: &serde_yaml::Value) -> Result<serde_json::Value, String> {
    serde_json::to_value(value).map_err(|error| format!("unrepresentable argument value: {}", error))
}

fn check_arguments(capture: &ResultCapture, declared: &[serde_yaml::Value]) -> CheckResult {
    let mut expected: Vec<Box<dyn ArgumentValue>> = Vec::with_capacity(declared.len());
    for value in declared {
        match to_argument(value) {
            Ok(value) => expected.push(Box::new(value)),
            Err(reason) => return CheckResult::Fail { reason },
        }
    }

    check(
        expect(capture)
            .view_component()
            .and_then(|builder| builder.with_arguments(expected)),
    )
}

fn check_has_argument(
    capture: &ResultCapture,
    declared: &serde_yaml::Value,
) -> (String, CheckResult) {
    let value = match to_argument(declared) {
        Ok(value) => value,
        Err(reason) => return ("has argument".to_string(), CheckResult::Fail { reason }),
    };
    let description = format!("has argument {}", value);

    let outcome = check(
        expect(capture)
            .view_component()
            .and_then(|builder| builder.with_argument(value)),
    );
    (description, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaType;
    use crate::result::{ArgumentPayload, ContentResult, ViewComponentResult};
    use crate::status::StatusCode;
    use serde_json::json;

    use super::super::parser::Expectation;

    fn component_capture() -> ResultCapture {
        ResultCapture::new(
            "ListRecent",
            "ReportsController",
            ViewComponentResult {
                status_code: Some(StatusCode::INTERNAL_SERVER_ERROR),
                content_type: Some(MediaType::parse("application/xml")),
                view_engine: None,
                arguments: ArgumentPayload::Sequence(vec![
                    Box::new(json!(1)),
                    Box::new(json!("text")),
                ]),
            }
            .into(),
        )
    }

    fn content_capture(body: &str) -> ResultCapture {
        ResultCapture::new(
            "Export",
            "ReportsController",
            ContentResult {
                body: body.to_string(),
                content_type: None,
                status_code: None,
            }
            .into(),
        )
    }

    fn scenario(expect: Expectation) -> Scenario {
        Scenario {
            name: "test".to_string(),
            description: None,
            expect,
        }
    }

    #[test]
    fn test_full_component_scenario_passes() {
        let scenario = scenario(Expectation {
            result: Some("view_component".to_string()),
            status_code: Some(500),
            content_type: Some(Some("application/xml".to_string())),
            arguments: Some(vec![
                serde_yaml::from_str("1").unwrap(),
                serde_yaml::from_str("text").unwrap(),
            ]),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|(_, result)| result.is_pass()));
    }

    #[test]
    fn test_status_mismatch_reports_library_message() {
        let scenario = scenario(Expectation {
            status_code: Some(404),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        assert_eq!(results.len(), 1);
        match &results[0].1 {
            CheckResult::Fail { reason } => {
                assert_eq!(
                    reason,
                    "When calling ListRecent action in ReportsController expected view \
                     component result to have 404 (NotFound) status code, but instead \
                     received 500 (InternalServerError)."
                );
            }
            CheckResult::Pass => panic!("expected a failure"),
        }
    }

    #[test]
    fn test_variant_mismatch_is_reported() {
        let scenario = scenario(Expectation {
            result: Some("view".to_string()),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        assert!(results[0].1.is_fail());
    }

    #[test]
    fn test_unknown_variant_name_is_reported() {
        let scenario = scenario(Expectation {
            result: Some("redirect".to_string()),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        match &results[0].1 {
            CheckResult::Fail { reason } => assert!(reason.contains("Unknown result variant")),
            CheckResult::Pass => panic!("expected a failure"),
        }
    }

    #[test]
    fn test_content_type_null_expectation() {
        let scenario = scenario(Expectation {
            content_type: Some(None),
            ..Default::default()
        });

        // Component carries application/xml, so asserting absence fails.
        let results = run_scenario(&scenario, &component_capture());
        assert_eq!(results[0].0, "content type is null");
        assert!(results[0].1.is_fail());

        // A bare content result without a content type passes.
        let results = run_scenario(&scenario, &content_capture("ready"));
        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_body_constraints() {
        let scenario = scenario(Expectation {
            result: Some("content".to_string()),
            body: Some(BodyExpectation {
                equals: None,
                contains: vec!["42 rows".to_string()],
                not_contains: vec!["error".to_string()],
                matches: vec![r"\d+ rows".to_string()],
                not_matches: vec!["fail".to_string()],
            }),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &content_capture("exported 42 rows"));
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|(_, result)| result.is_pass()));
    }

    #[test]
    fn test_body_contains_failure() {
        let scenario = scenario(Expectation {
            body: Some(BodyExpectation {
                contains: vec!["ready".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &content_capture("pending"));
        match &results[0].1 {
            CheckResult::Fail { reason } => assert_eq!(reason, "body does not contain 'ready'"),
            CheckResult::Pass => panic!("expected a failure"),
        }
    }

    #[test]
    fn test_invalid_regex_is_reported_not_fatal() {
        let scenario = scenario(Expectation {
            body: Some(BodyExpectation {
                matches: vec!["[unclosed".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &content_capture("anything"));
        match &results[0].1 {
            CheckResult::Fail { reason } => assert!(reason.starts_with("invalid regex")),
            CheckResult::Pass => panic!("expected a failure"),
        }
    }

    #[test]
    fn test_has_argument_check() {
        let scenario = scenario(Expectation {
            has_argument: Some(serde_yaml::from_str("text").unwrap()),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        assert_eq!(results[0].0, "has argument \"text\"");
        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_facet_unsupported_by_variant() {
        let scenario = scenario(Expectation {
            view_name: Some("Index".to_string()),
            ..Default::default()
        });

        let results = run_scenario(&scenario, &component_capture());
        match &results[0].1 {
            CheckResult::Fail { reason } => {
                assert_eq!(
                    reason,
                    "view component result does not carry a view name facet"
                );
            }
            CheckResult::Pass => panic!("expected a failure"),
        }
    }
}
