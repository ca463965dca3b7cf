//! Configuration file support.
//!
//! This module handles loading and discovering `.verdict.yaml` files, which
//! control how scenario files are discovered.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default configuration embedded at compile time.
const DEFAULT_CONFIG_STR: &str = include_str!("../default.verdict.yaml");

/// Parsed default config, initialized once on first access.
fn default_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_CONFIG_STR)
            .expect("embedded default.verdict.yaml should be valid YAML")
    })
}

/// Configuration for scenario discovery.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Glob pattern for matching scenario files.
    pub scenario_pattern: String,

    /// Root directory to start the search from.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Whether to scan directories recursively.
    pub recursive: bool,

    /// Directories to exclude from scanning.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        default_config().clone()
    }
}

impl Config {
    /// Discover config by searching from `start_dir` upward.
    /// Returns `(config, config_dir)` so a relative `root` can be resolved.
    pub fn discover(start_dir: &Path) -> Option<(Self, PathBuf)> {
        let config_path = find_config_file(start_dir)?;
        let config_dir = config_path.parent()?.to_path_buf();
        let config = load_config(&config_path).ok()?;
        Some((config, config_dir))
    }

    /// Load config from an explicit path.
    pub fn load(path: &Path) -> Result<(Self, PathBuf)> {
        let config_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let config = load_config(path)?;
        Ok((config, config_dir))
    }

    /// Merge CLI overrides into this config.
    pub fn with_overrides(
        mut self,
        pattern: Option<String>,
        root: Option<PathBuf>,
        no_recursive: bool,
    ) -> Self {
        if let Some(pattern) = pattern {
            self.scenario_pattern = pattern;
        }
        if let Some(root) = root {
            self.root = Some(root);
        }
        if no_recursive {
            self.recursive = false;
        }
        self
    }

    /// The directory discovery should start from: `root` resolved relative
    /// to the config file when both are known, otherwise the base directory.
    pub fn search_dir(&self, base_dir: &Path, config_dir: Option<&Path>) -> PathBuf {
        match (&self.root, config_dir) {
            (Some(root), Some(dir)) => dir.join(root),
            (Some(root), None) => base_dir.join(root),
            (None, _) => base_dir.to_path_buf(),
        }
    }
}

/// Search for a config file starting from `start` and walking up to the
/// filesystem root.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(".verdict.yaml"))
        .find(|candidate| candidate.exists())
}

fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}
