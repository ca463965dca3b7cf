//! Scenario file discovery using glob patterns and walkdir.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;

/// Discover scenario files under `dir` according to config. Results are
/// sorted for deterministic run order.
pub fn discover_scenarios(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let walker = if config.recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let mut scenarios = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.path(), &config.exclude))
    {
        let entry = entry?;
        if entry.path().is_file() && file_name_matches(entry.path(), &config.scenario_pattern) {
            scenarios.push(entry.path().to_path_buf());
        }
    }

    scenarios.sort();
    Ok(scenarios)
}

/// Check whether a file name matches the pattern. Brace alternatives are
/// expanded first, since `glob::Pattern` does not support them:
/// `*.{yaml,yml}` matches either extension.
fn file_name_matches(path: &Path, pattern: &str) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    expand_braces(pattern).iter().any(|alternative| {
        glob::Pattern::new(alternative)
            .map(|pattern| pattern.matches(file_name))
            .unwrap_or(false)
    })
}

/// Expand the first brace group and recurse: `*.{yaml,yml}` becomes
/// `["*.yaml", "*.yml"]`. A pattern without braces comes back unchanged.
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(close) = pattern[open..].find('}') else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let alternatives = &pattern[open + 1..open + close];
    let suffix = &pattern[open + close + 1..];

    alternatives
        .split(',')
        .flat_map(|alternative| expand_braces(&format!("{prefix}{alternative}{suffix}")))
        .collect()
}

/// Check if any path component names an excluded directory.
fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    path.components().any(|component| {
        matches!(component, std::path::Component::Normal(name)
            if name.to_str().map_or(false, |name| excludes.iter().any(|excluded| excluded == name)))
    })
}
