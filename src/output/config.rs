//! Configuration for report display.

use std::io::IsTerminal;

/// When to display a section of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Always show, regardless of outcome.
    Always,
    /// Only show when a check failed (default).
    #[default]
    OnFailure,
    /// Never show.
    Never,
}

/// Configuration for report display.
///
/// ```rust,ignore
/// use verdict::{OutputConfig, OutputMode};
///
/// let config = OutputConfig::new()
///     .capture_details(OutputMode::Always)
///     .truncate_at(100);
/// ```
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// When to show the captured result's details under the check list.
    pub capture_details: OutputMode,
    /// Maximum characters before truncating the capture dump.
    pub truncate_at: usize,
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            capture_details: OutputMode::OnFailure,
            truncate_at: 400,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl OutputConfig {
    /// Defaults: capture details on failure, 400 character truncation,
    /// colors auto-detected from TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure when to show the captured result's details.
    pub fn capture_details(mut self, mode: OutputMode) -> Self {
        self.capture_details = mode;
        self
    }

    /// Set the maximum characters before truncating the capture dump.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// A verbose configuration that always shows everything.
    pub fn verbose() -> Self {
        Self {
            capture_details: OutputMode::Always,
            ..Self::default()
        }
    }

    /// A quiet configuration that never shows capture details.
    pub fn quiet() -> Self {
        Self {
            capture_details: OutputMode::Never,
            ..Self::default()
        }
    }
}
