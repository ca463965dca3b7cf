//! Declarative scenarios over recorded captures.
//!
//! A scenario YAML file declares the expected shape of one captured action
//! result. The runner translates each declared expectation into fluent API
//! calls and collects every outcome instead of stopping at the first
//! failure, which is what a CLI report wants.
//!
//! # Example scenario
//!
//! ```yaml
//! name: recent reports component
//! expect:
//!   result: view_component
//!   status_code: 500
//!   content_type: application/xml
//!   arguments: [1, text]
//! ```

mod parser;
mod runner;

pub use parser::{
    load_scenario, parse_variant_name, BodyExpectation, Expectation, Scenario, ScenarioError,
    VariantName,
};
pub use runner::{run_scenario, CheckResult};
