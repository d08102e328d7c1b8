//! Policy gate: fixed compliance rules over the scenario and proposals.
//!
//! Rules run in order and are not mutually exclusive — a run can be both
//! blocked and flagged for approval. The returned list is never empty:
//! when nothing fires, a single synthetic `allowed` finding records that
//! no rules were broken.

use crate::agents::sales::DISCOUNT_ACTION_ID;
use crate::config::OfficeConfig;
use crate::domain::{find_agent, AgentId, AgentOutput, PolicyFinding, PolicyStatus, Scenario};

/// Reason attached to the blocking compliance finding.
pub const COMPLIANCE_BLOCK_REASON: &str =
    "Compliance cannot be bypassed. Not even for VIP customers.";

/// Reason attached to the discount approval finding.
pub const DISCOUNT_APPROVAL_REASON: &str =
    "Discount is higher than allowed. A human must approve this trade-off.";

/// Reason attached to the synthetic all-clear finding.
pub const ALL_CLEAR_REASON: &str = "No rules were broken.";

/// Check the scenario and proposals against the compliance rules.
///
/// Guaranteed to return at least one finding.
pub fn evaluate_policy(
    scenario: &Scenario,
    agents: &[AgentOutput],
    config: &OfficeConfig,
) -> Vec<PolicyFinding> {
    let mut findings = Vec::new();

    // Rule 1: compliance override language under strict compliance.
    // A textual heuristic over the free text, intentionally brittle —
    // it matches phrases, not intent.
    if scenario.constraints.compliance_strict
        && config.matches_compliance_phrase(&scenario.free_text)
    {
        findings.push(PolicyFinding {
            status: PolicyStatus::Blocked,
            reason: COMPLIANCE_BLOCK_REASON.to_string(),
        });
    }

    // Rule 2: discounts above the cap need a human signature.
    if let Some(rate) = proposed_discount(agents) {
        if rate > scenario.constraints.discount_cap {
            findings.push(PolicyFinding {
                status: PolicyStatus::NeedsApproval,
                reason: DISCOUNT_APPROVAL_REASON.to_string(),
            });
        }
    }

    // No findings means all good — say so explicitly.
    if findings.is_empty() {
        findings.push(PolicyFinding {
            status: PolicyStatus::Allowed,
            reason: ALL_CLEAR_REASON.to_string(),
        });
    }

    findings
}

/// The typed discount rate from Sales' designated action, if present.
fn proposed_discount(agents: &[AgentOutput]) -> Option<f64> {
    find_agent(agents, AgentId::Sales)?
        .action(DISCOUNT_ACTION_ID)?
        .discount_rate
}
