//! Structured observability hooks for the run lifecycle.
//!
//! Emission points: run started, agent evaluated, conflict detected,
//! policy finding, run finished. Events are emitted at `info!` level
//! through `tracing`; without a subscriber installed they are no-ops,
//! which keeps the pipeline itself pure.

use tracing::info;

use crate::domain::{AgentOutput, Conflict, PolicyFinding, RunResult};

/// RAII guard that enters a scenario-scoped tracing span.
///
/// All lifecycle events emitted while the guard is alive carry the
/// scenario id automatically.
pub struct RunSpan {
    _span: tracing::span::EnteredSpan,
}

impl RunSpan {
    /// Create and enter a span tagged with the scenario id.
    pub fn enter(scenario_id: &str) -> Self {
        let span = tracing::info_span!("office.run", scenario_id = %scenario_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a run started for the given scenario.
pub fn emit_run_started(scenario_id: &str, title: &str) {
    info!(event = "office.run_started", scenario_id = %scenario_id, title = %title);
}

/// Emit event: one agent produced its output.
pub fn emit_agent_evaluated(output: &AgentOutput) {
    info!(
        event = "office.agent_evaluated",
        agent = %output.agent,
        confidence = output.confidence,
        evidence = output.evidence,
        required_budget = output.required_budget,
    );
}

/// Emit event: the detector surfaced a conflict.
pub fn emit_conflict_detected(conflict: &Conflict) {
    info!(
        event = "office.conflict_detected",
        severity = %conflict.severity,
        actors = %conflict.actors.join(", "),
    );
}

/// Emit event: the policy gate produced a finding.
pub fn emit_policy_finding(finding: &PolicyFinding) {
    info!(
        event = "office.policy_finding",
        status = %finding.status,
        reason = %finding.reason,
    );
}

/// Emit event: the run completed with its derived counts.
pub fn emit_run_finished(scenario_id: &str, result: &RunResult) {
    info!(
        event = "office.run_finished",
        scenario_id = %scenario_id,
        agents = result.agents.len(),
        conflicts = result.conflicts.len(),
        policy_findings = result.policy_findings.len(),
        post_mortem_lines = result.post_mortem.len(),
    );
}
