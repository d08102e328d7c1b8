//! The rule-based agent evaluators.
//!
//! Each evaluator is a pure, total function from a scenario to an
//! [`AgentOutput`]: no error path, deterministic for identical input.
//! The numbers they self-report are engineered personalities — Marketing
//! is confident without evidence, Sales shifts with the customer mix,
//! Accounting leans on structured numbers — and the downstream rules
//! depend on those signatures.

pub mod accounting;
pub mod marketing;
pub mod sales;

use crate::config::OfficeConfig;
use crate::domain::{AgentOutput, Scenario};

/// Evaluate every agent in the fixed order Marketing, Sales, Accounting.
///
/// The order is part of the contract: `RunResult::agents` preserves it.
pub fn evaluate_all(scenario: &Scenario, config: &OfficeConfig) -> Vec<AgentOutput> {
    vec![
        marketing::evaluate(scenario),
        sales::evaluate(scenario, config),
        accounting::evaluate(scenario, &config.thresholds),
    ]
}
