use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use verdict::config::Config;
use verdict::discovery::discover_scenarios;
use verdict::output::{OutputConfig, OutputFormatter};
use verdict::record::load_record;
use verdict::scenario::{load_scenario, run_scenario, CheckResult};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(
    about = "Replay recorded action results against declarative scenarios",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one scenario file against one recorded capture
    Check {
        /// Path to the scenario YAML file
        scenario: PathBuf,

        /// Path to the recorded capture JSON file
        capture: PathBuf,

        /// Always show the captured result's details
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run every scenario discovered under a path against one capture
    Run {
        /// Scenario file or directory to search for scenario files
        path: PathBuf,

        /// Path to the recorded capture JSON file
        capture: PathBuf,

        /// Always show the captured result's details
        #[arg(short, long)]
        verbose: bool,

        /// Scenario file pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Root directory for discovery (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Disable recursive directory scanning
        #[arg(long)]
        no_recursive: bool,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List scenario files without running them
    List {
        /// Directory to search for scenario files
        path: PathBuf,

        /// Scenario file pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Root directory for discovery (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Disable recursive directory scanning
        #[arg(long)]
        no_recursive: bool,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            scenario,
            capture,
            verbose,
        } => {
            let passed = check_one(&scenario, &capture, verbose)?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Run {
            path,
            capture,
            verbose,
            pattern,
            root,
            no_recursive,
            config,
        } => {
            if path.is_file() {
                let passed = check_one(&path, &capture, verbose)?;
                if !passed {
                    std::process::exit(1);
                }
            } else {
                let (config, search_root) =
                    resolve_config(&path, pattern, root, no_recursive, config.as_deref());
                run_directory(&search_root, &capture, verbose, &config)?;
            }
        }
        Commands::List {
            path,
            pattern,
            root,
            no_recursive,
            config,
        } => {
            let (config, search_root) =
                resolve_config(&path, pattern, root, no_recursive, config.as_deref());
            list_scenarios(&search_root, &config)?;
        }
    }

    Ok(())
}

/// Load config from an explicit path or discover it, then apply CLI
/// overrides and resolve the search root.
fn resolve_config(
    base: &Path,
    pattern: Option<String>,
    root: Option<PathBuf>,
    no_recursive: bool,
    explicit_path: Option<&Path>,
) -> (Config, PathBuf) {
    let (config, config_dir) = match explicit_path {
        Some(path) => Config::load(path)
            .map(|(config, dir)| (config, Some(dir)))
            .unwrap_or_else(|_| (Config::default(), None)),
        None => Config::discover(base)
            .map(|(config, dir)| (config, Some(dir)))
            .unwrap_or_else(|| (Config::default(), None)),
    };

    let config = config.with_overrides(pattern, root, no_recursive);
    let search_root = config.search_dir(base, config_dir.as_deref());
    (config, search_root)
}

fn check_one(scenario_path: &Path, capture_path: &Path, verbose: bool) -> Result<bool> {
    let scenario = load_scenario(scenario_path)
        .with_context(|| format!("Failed to load scenario file: {:?}", scenario_path))?;
    let record = load_record(capture_path)?;
    let captured_at = record.captured_at;
    let capture = record.into_capture();

    let output_config = if verbose {
        OutputConfig::verbose()
    } else {
        OutputConfig::new()
    };
    let formatter = OutputFormatter::new(output_config);

    println!();
    println!("Checking: \"{}\"", scenario.name);
    println!("Capture: {}", formatter.format_capture_header(&capture));
    if let Some(recorded) = captured_at {
        println!("Recorded: {}", recorded.to_rfc3339());
    }
    println!();

    let results = run_scenario(&scenario, &capture);
    let all_passed = print_report(&formatter, &results);

    if formatter.should_show_capture(all_passed) {
        println!();
        println!("Captured result:");
        println!("  {}", formatter.format_capture_details(&capture));
    }

    Ok(all_passed)
}

/// Print the check list and summary. Returns true if everything passed.
fn print_report(formatter: &OutputFormatter, results: &[(String, CheckResult)]) -> bool {
    let passed = results.iter().filter(|(_, result)| result.is_pass()).count();
    let failed = results.len() - passed;

    print!("{}", formatter.format_checks(results));
    println!();
    println!("{}", formatter.format_summary(passed, failed));
    failed == 0
}

fn run_directory(dir: &Path, capture_path: &Path, verbose: bool, config: &Config) -> Result<()> {
    let scenario_files = discover_scenarios(dir, config)?;

    if scenario_files.is_empty() {
        println!();
        println!(
            "No scenario files found matching pattern '{}' in {:?}",
            config.scenario_pattern, dir
        );
        return Ok(());
    }

    println!();
    println!(
        "Found {} scenario file(s) matching '{}'",
        scenario_files.len(),
        config.scenario_pattern
    );

    let mut total_passed = 0;
    let mut total_failed = 0;

    for path in scenario_files {
        match check_one(&path, capture_path, verbose) {
            Ok(true) => total_passed += 1,
            Ok(false) => total_failed += 1,
            Err(error) => {
                println!("\x1b[31mError running {:?}: {}\x1b[0m", path, error);
                total_failed += 1;
            }
        }
        println!();
        println!("{}", "\u{2500}".repeat(60));
    }

    println!();
    println!("Total: {} passed, {} failed", total_passed, total_failed);

    if total_failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn list_scenarios(dir: &Path, config: &Config) -> Result<()> {
    let scenario_files = discover_scenarios(dir, config)?;

    println!();
    println!("Discovered {} scenario file(s):", scenario_files.len());
    println!();

    for path in &scenario_files {
        println!("  {}", path.display());
    }

    println!();
    Ok(())
}
