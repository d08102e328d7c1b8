//! Orchestrator: the single entry point of the evaluation pipeline.
//!
//! Validates the scenario at the boundary, evaluates every agent in
//! fixed order, runs conflict detection and the policy gate, and
//! synthesizes the post-mortem. One invocation, one fresh [`RunResult`];
//! no retries, no partial results, no state shared between runs.

use crate::agents;
use crate::config::OfficeConfig;
use crate::conflict::detect_conflicts;
use crate::domain::{
    AgentId, AgentOutput, Conflict, PolicyFinding, PolicyStatus, Result, RunResult, Scenario,
};
use crate::obs;
use crate::policy::evaluate_policy;

/// Run the whole backoffice over one scenario with the standard rules.
///
/// # Errors
///
/// Rejects structurally invalid scenarios with
/// [`OfficeError::Validation`](crate::domain::OfficeError) before any
/// agent runs. For a valid scenario the pipeline always produces a
/// result.
pub fn run_office(scenario: &Scenario) -> Result<RunResult> {
    run_office_with_config(scenario, &OfficeConfig::standard())
}

/// Run the whole backoffice over one scenario with explicit rules.
pub fn run_office_with_config(scenario: &Scenario, config: &OfficeConfig) -> Result<RunResult> {
    scenario.validate()?;

    let _span = obs::RunSpan::enter(&scenario.id);
    obs::emit_run_started(&scenario.id, &scenario.title);

    let agent_outputs = agents::evaluate_all(scenario, config);
    for output in &agent_outputs {
        obs::emit_agent_evaluated(output);
    }

    let conflicts = detect_conflicts(scenario, &agent_outputs, config);
    for conflict in &conflicts {
        obs::emit_conflict_detected(conflict);
    }

    let policy_findings = evaluate_policy(scenario, &agent_outputs, config);
    for finding in &policy_findings {
        obs::emit_policy_finding(finding);
    }

    let post_mortem = build_post_mortem(&agent_outputs, &conflicts, &policy_findings, config);

    let result = RunResult {
        agents: agent_outputs,
        conflicts,
        policy_findings,
        post_mortem,
    };
    obs::emit_run_finished(&scenario.id, &result);
    Ok(result)
}

/// Synthesize human-readable explanatory lines from the derived facts.
///
/// An empty post-mortem means "no issues" and is left for the consumer
/// to interpret.
fn build_post_mortem(
    agents: &[AgentOutput],
    conflicts: &[Conflict],
    findings: &[PolicyFinding],
    config: &OfficeConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    for agent in agents {
        if agent.is_overconfident(&config.thresholds) {
            lines.push(format!(
                "Overconfidence detected: {} confidence high ({}) but evidence low ({}).",
                agent.agent, agent.confidence, agent.evidence,
            ));
        }
    }

    if conflicts
        .iter()
        .any(|c| c.involves(AgentId::Sales) && c.involves(AgentId::Accounting))
    {
        lines.push("Misalignment: Sales optimization conflicts with cash constraints.".to_string());
    }
    if conflicts.iter().any(|c| c.involves(AgentId::Marketing)) {
        lines.push(
            "Misalignment: Growth spend conflicts with service capacity constraints.".to_string(),
        );
    }

    // Only the most severe policy message is reported.
    if findings.iter().any(|f| f.status == PolicyStatus::Blocked) {
        lines.push("Policy violation detected: one or more actions were blocked.".to_string());
    } else if findings
        .iter()
        .any(|f| f.status == PolicyStatus::NeedsApproval)
    {
        lines.push("Policy gate triggered: one or more actions need human approval.".to_string());
    }

    lines
}
