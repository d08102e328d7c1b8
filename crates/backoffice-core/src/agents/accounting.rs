//! Accounting evaluator: protects the cash runway.
//!
//! Accounting reads the support backlog as a leading indicator of
//! refund and churn risk. Above the configured pressure threshold it
//! moves to freeze non-essential spend and gate discounts; below it,
//! it settles for budget caps. Evidence stays flat either way —
//! accounting leans on structured numbers, not narratives.

use crate::config::RuleThresholds;
use crate::domain::{Action, AgentId, AgentOutput, Proposal, Scenario};

/// Id of the discount-governance action inside Accounting's proposal.
pub const DISCOUNT_GOVERNANCE_ACTION_ID: &str = "acct-discount-governance";

/// Id of the budget-cap action inside Accounting's proposal.
pub const BUDGET_CAP_ACTION_ID: &str = "acct-budget-cap";

const EVIDENCE: f64 = 0.55;

/// Evaluate the scenario from Accounting's point of view.
pub fn evaluate(scenario: &Scenario, thresholds: &RuleThresholds) -> AgentOutput {
    let cash_risk_high = scenario.backlog_cs >= thresholds.backlog_pressure;

    AgentOutput {
        agent: AgentId::Accounting,
        confidence: if cash_risk_high { 0.78 } else { 0.62 },
        evidence: EVIDENCE,
        assumptions: vec![
            if cash_risk_high {
                "High backlog increases refund / churn risk".to_string()
            } else {
                "Backlog manageable without revenue impact".to_string()
            },
            "Budget overruns reduce runway".to_string(),
        ],
        missing_inputs: vec![
            "Cash on hand".to_string(),
            "Burn rate".to_string(),
            "AR/AP aging".to_string(),
        ],
        kpi_local_goal: "Protect cash runway / reduce risk".to_string(),
        proposal: Proposal {
            summary: if cash_risk_high {
                "Freeze non-essential spend and require approvals on discounts.".to_string()
            } else {
                "Maintain spend but enforce budget caps.".to_string()
            },
            actions: vec![
                Action::new(
                    DISCOUNT_GOVERNANCE_ACTION_ID,
                    if cash_risk_high {
                        "Require approval for discounts > 20%"
                    } else {
                        "Keep discounts within cap"
                    },
                    0.0,
                )
                .policy_sensitive(),
                Action::new(BUDGET_CAP_ACTION_ID, "Enforce monthly budget cap", 0.0),
            ],
        },
        required_budget: 0.0,
        risks: vec![
            "Over-tight control may slow growth".to_string(),
            "Teams may bypass governance if process is painful".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(backlog: u32) -> AgentOutput {
        let scenario = Scenario::new("s-1", "Accounting check").with_backlog(backlog);
        evaluate(&scenario, &RuleThresholds::default())
    }

    #[test]
    fn test_high_backlog_raises_confidence() {
        assert_eq!(run(100).confidence, 0.78);
        assert_eq!(run(420).confidence, 0.78);
    }

    #[test]
    fn test_low_backlog_keeps_confidence_moderate() {
        assert_eq!(run(0).confidence, 0.62);
        assert_eq!(run(99).confidence, 0.62);
    }

    #[test]
    fn test_evidence_is_flat() {
        assert_eq!(run(0).evidence, EVIDENCE);
        assert_eq!(run(500).evidence, EVIDENCE);
    }

    #[test]
    fn test_never_asks_for_budget() {
        assert_eq!(run(500).required_budget, 0.0);
        for action in &run(500).proposal.actions {
            assert_eq!(action.cost, 0.0);
        }
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // backlog == threshold counts as high risk.
        assert!(run(100).proposal.summary.contains("Freeze"));
        assert!(run(99).proposal.summary.contains("Maintain"));
    }
}
