//! Backoffice Core Library
//!
//! A deterministic "AI backoffice" evaluation pipeline: three rule-based
//! agents (Marketing, Sales, Accounting) each propose actions for a
//! business scenario; a conflict detector surfaces the tensions between
//! them, a policy gate checks fixed compliance rules, and a classifier
//! reduces everything to a GO / NEEDS HUMAN / STOP verdict.
//!
//! The whole pipeline is synchronous and pure: [`run_office`] is the
//! single entry point, and identical scenarios always produce
//! structurally identical results.

pub mod agents;
pub mod config;
pub mod conflict;
pub mod domain;
pub mod obs;
pub mod orchestrator;
pub mod policy;
pub mod status;
pub mod telemetry;

pub use config::{OfficeConfig, RuleThresholds};
pub use conflict::{detect_conflicts, OPS_CS_ROLE};
pub use domain::{
    find_agent, run_digest, Action, AgentId, AgentOutput, Conflict, OfficeError, PolicyFinding,
    PolicyStatus, Proposal, Result, RunResult, Scenario, ScenarioConstraints, Severity,
    ValidationError,
};
pub use orchestrator::{run_office, run_office_with_config};
pub use policy::evaluate_policy;
pub use status::{classify, OfficeStatus, Verdict};
pub use telemetry::init_tracing;

/// Backoffice version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
