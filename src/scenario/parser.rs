//! Scenario parsing.
//!
//! YAML deserialization and string-to-variant resolution live here; the
//! runner never touches raw strings.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Error type for scenario file issues.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Unknown result variant: '{0}'. Available variants: status_code, content, view, view_component")]
    UnknownVariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A scenario loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Human-readable name for this scenario.
    pub name: String,
    /// Optional longer description, shown nowhere but the file itself.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared expectations about the captured result.
    pub expect: Expectation,
}

/// Declared expectations. Omitted fields are simply not checked.
#[derive(Debug, Default, Deserialize)]
pub struct Expectation {
    /// Expected result variant (status_code, content, view, view_component).
    #[serde(default)]
    pub result: Option<String>,
    /// Expected numeric status code.
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Expected content type. `content_type: null` asserts the facet is
    /// absent; omitting the key skips the check entirely.
    #[serde(default, deserialize_with = "present_or_null")]
    pub content_type: Option<Option<String>>,
    /// Expected view name (view results only).
    #[serde(default)]
    pub view_name: Option<String>,
    /// Body constraints (content results only).
    #[serde(default)]
    pub body: Option<BodyExpectation>,
    /// Strict positional argument comparison (view component results only).
    #[serde(default)]
    pub arguments: Option<Vec<serde_yaml::Value>>,
    /// Presence check: at least one structurally equal argument.
    #[serde(default)]
    pub has_argument: Option<serde_yaml::Value>,
}

/// Content checks for the body facet. `equals` is exact; the pattern lists
/// use substring and regex matching.
#[derive(Debug, Default, Deserialize)]
pub struct BodyExpectation {
    #[serde(default)]
    pub equals: Option<String>,
    #[serde(default)]
    pub contains: Vec<String>,
    #[serde(default)]
    pub not_contains: Vec<String>,
    #[serde(default)]
    pub matches: Vec<String>,
    #[serde(default)]
    pub not_matches: Vec<String>,
}

/// Distinguishes an explicit `null` (assert absence) from a missing key
/// (skip the check): the field deserializes to `Some(None)` for `null` and
/// stays `None` via `#[serde(default)]` when the key is absent.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Result variant a scenario can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantName {
    StatusCode,
    Content,
    View,
    ViewComponent,
}

/// Resolve a variant name from YAML (case-insensitive, `-` and `_`
/// interchangeable, with a couple of aliases).
pub fn parse_variant_name(raw: &str) -> Result<VariantName, ScenarioError> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "status_code" | "statuscode" => Ok(VariantName::StatusCode),
        "content" => Ok(VariantName::Content),
        "view" => Ok(VariantName::View),
        "view_component" | "viewcomponent" | "component" => Ok(VariantName::ViewComponent),
        _ => Err(ScenarioError::UnknownVariant(raw.to_string())),
    }
}

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_scenario() {
        let yaml = r#"
name: recent reports component
description: captured from the staging harness
expect:
  result: view_component
  status_code: 500
  content_type: application/xml
  arguments: [1, text]
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "recent reports component");
        assert_eq!(scenario.expect.status_code, Some(500));
        assert_eq!(
            scenario.expect.content_type,
            Some(Some("application/xml".to_string()))
        );
        assert_eq!(scenario.expect.arguments.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_content_type_null_vs_missing() {
        let with_null: Scenario = serde_yaml::from_str(
            "name: t\nexpect:\n  content_type: null\n",
        )
        .unwrap();
        assert_eq!(with_null.expect.content_type, Some(None));

        let without_key: Scenario = serde_yaml::from_str(
            "name: t\nexpect:\n  status_code: 200\n",
        )
        .unwrap();
        assert_eq!(without_key.expect.content_type, None);
    }

    #[test]
    fn test_parse_body_expectation() {
        let yaml = r#"
name: export body
expect:
  result: content
  body:
    contains: ["ready"]
    not_contains: ["error"]
    matches: ['\d+ rows']
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        let body = scenario.expect.body.unwrap();
        assert_eq!(body.contains, vec!["ready"]);
        assert_eq!(body.not_contains, vec!["error"]);
        assert_eq!(body.matches, vec![r"\d+ rows"]);
        assert!(body.equals.is_none());
    }

    #[test]
    fn test_parse_variant_name_aliases() {
        assert_eq!(
            parse_variant_name("view_component").unwrap(),
            VariantName::ViewComponent
        );
        assert_eq!(
            parse_variant_name("Component").unwrap(),
            VariantName::ViewComponent
        );
        assert_eq!(
            parse_variant_name("status-code").unwrap(),
            VariantName::StatusCode
        );
        assert_eq!(parse_variant_name("content").unwrap(), VariantName::Content);
        assert!(parse_variant_name("redirect").is_err());
    }
}
