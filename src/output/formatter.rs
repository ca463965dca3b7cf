//! Rendering of scenario reports.

use crate::capture::ResultCapture;
use crate::output::config::{OutputConfig, OutputMode};
use crate::scenario::CheckResult;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Formatter for scenario check lists and summaries.
pub struct OutputFormatter {
    config: OutputConfig,
}

impl OutputFormatter {
    /// Create a new formatter with the given configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Create a formatter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OutputConfig::new())
    }

    /// Check if capture details should be shown given the outcome.
    pub fn should_show_capture(&self, all_passed: bool) -> bool {
        match self.config.capture_details {
            OutputMode::Always => true,
            OutputMode::OnFailure => !all_passed,
            OutputMode::Never => false,
        }
    }

    /// Render the check list, one line per check, reasons indented under
    /// failures.
    pub fn format_checks(&self, checks: &[(String, CheckResult)]) -> String {
        let mut output = String::new();
        for (description, result) in checks {
            match result {
                CheckResult::Pass => {
                    output.push_str(&format!(
                        "  {}\u{2713}{} {}\n",
                        self.color(GREEN),
                        self.color(RESET),
                        description
                    ));
                }
                CheckResult::Fail { reason } => {
                    output.push_str(&format!(
                        "  {}\u{2717}{} {}\n",
                        self.color(RED),
                        self.color(RESET),
                        description
                    ));
                    output.push_str(&format!("    \u{2514}\u{2500} {}\n", reason));
                }
            }
        }
        output
    }

    /// Render the pass/fail summary line.
    pub fn format_summary(&self, passed: usize, failed: usize) -> String {
        let color = if failed == 0 { GREEN } else { RED };
        format!(
            "{}Results: {}/{} passed{}",
            self.color(color),
            passed,
            passed + failed,
            self.color(RESET)
        )
    }

    /// Render a one-line header for the capture under test.
    pub fn format_capture_header(&self, capture: &ResultCapture) -> String {
        format!(
            "{} action in {} ({})",
            capture.action(),
            capture.container(),
            capture.result().variant_label()
        )
    }

    /// Render the captured result's details, truncated per configuration.
    pub fn format_capture_details(&self, capture: &ResultCapture) -> String {
        let dump = format!("{:?}", capture.result());
        let truncated = self.truncate(&dump);
        format!("{}{}{}", self.color(DIM), truncated, self.color(RESET))
    }

    fn truncate(&self, value: &str) -> String {
        let limit = self.config.truncate_at;
        if value.chars().count() <= limit {
            return value.to_string();
        }
        let cut: String = value.chars().take(limit.saturating_sub(3)).collect();
        format!("{}...", cut)
    }

    fn color(&self, code: &'static str) -> &'static str {
        if self.config.colors_enabled {
            code
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::StatusCodeResult;
    use crate::status::StatusCode;

    fn plain_formatter() -> OutputFormatter {
        OutputFormatter::new(OutputConfig::new().colors(false))
    }

    fn checks() -> Vec<(String, CheckResult)> {
        vec![
            ("status code is 204".to_string(), CheckResult::Pass),
            (
                "content type is 'text/plain'".to_string(),
                CheckResult::Fail {
                    reason: "no content type on a bare status result".to_string(),
                },
            ),
        ]
    }

    #[test]
    fn test_format_checks_lists_reasons_under_failures() {
        let rendered = plain_formatter().format_checks(&checks());
        assert!(rendered.contains("\u{2713} status code is 204"));
        assert!(rendered.contains("\u{2717} content type is 'text/plain'"));
        assert!(rendered.contains("\u{2514}\u{2500} no content type on a bare status result"));
    }

    #[test]
    fn test_format_summary() {
        let formatter = plain_formatter();
        assert_eq!(formatter.format_summary(2, 0), "Results: 2/2 passed");
        assert_eq!(formatter.format_summary(1, 1), "Results: 1/2 passed");
    }

    #[test]
    fn test_should_show_capture() {
        let on_failure = OutputFormatter::new(OutputConfig::new());
        assert!(on_failure.should_show_capture(false));
        assert!(!on_failure.should_show_capture(true));

        let verbose = OutputFormatter::new(OutputConfig::verbose());
        assert!(verbose.should_show_capture(true));
    }

    #[test]
    fn test_capture_header_and_truncation() {
        let capture = ResultCapture::new(
            "Health",
            "StatusController",
            StatusCodeResult {
                status_code: StatusCode::NO_CONTENT,
            }
            .into(),
        );

        let formatter = OutputFormatter::new(OutputConfig::new().colors(false).truncate_at(10));
        assert_eq!(
            formatter.format_capture_header(&capture),
            "Health action in StatusController (status code result)"
        );
        let details = formatter.format_capture_details(&capture);
        assert!(details.ends_with("..."));
        assert!(details.chars().count() <= 10);
    }
}
