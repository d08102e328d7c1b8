//! Marketing evaluator: always wants to spend more.
//!
//! Marketing proposes the same move for every scenario — raise paid
//! acquisition by a fixed share of the monthly budget — and reports high
//! confidence on thin evidence. That gap is deliberate: it is the
//! overconfidence signature the conflict detector looks for.

use crate::domain::{Action, AgentId, AgentOutput, Proposal, Scenario};

/// Share of the monthly budget Marketing asks to add to paid spend.
pub const PAID_SPEND_FRACTION: f64 = 0.3;

/// Id of the paid-spend action inside Marketing's proposal.
pub const PAID_SPEND_ACTION_ID: &str = "mkt-paid-spend";

const CONFIDENCE: f64 = 0.86;
const EVIDENCE: f64 = 0.32;

/// Evaluate the scenario from Marketing's point of view.
pub fn evaluate(scenario: &Scenario) -> AgentOutput {
    let required_budget = scenario.monthly_budget * PAID_SPEND_FRACTION;

    AgentOutput {
        agent: AgentId::Marketing,
        confidence: CONFIDENCE,
        evidence: EVIDENCE,
        assumptions: vec![
            "Paid campaigns will scale linearly".to_string(),
            "Demand is elastic".to_string(),
            "Brand awareness is low".to_string(),
            "Sales can absorb more leads".to_string(),
            "Market conditions are stable".to_string(),
        ],
        missing_inputs: vec![
            "CAC".to_string(),
            "LTV".to_string(),
            "Best performing channel".to_string(),
        ],
        kpi_local_goal: "Increase pipeline volume".to_string(),
        proposal: Proposal {
            summary: "Increase paid acquisition to boost pipeline rapidly.".to_string(),
            actions: vec![Action::new(
                PAID_SPEND_ACTION_ID,
                "Increase paid ads spend by 30%",
                required_budget,
            )],
        },
        required_budget,
        risks: vec![
            "Low ROI if CAC is higher than expected".to_string(),
            "Increased pressure on Sales and CS".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleThresholds;

    #[test]
    fn test_required_budget_is_fraction_of_monthly() {
        let scenario = Scenario::new("s-1", "Budgeted").with_monthly_budget(60_000.0);
        let output = evaluate(&scenario);
        assert_eq!(output.required_budget, 18_000.0);
        assert_eq!(output.action(PAID_SPEND_ACTION_ID).unwrap().cost, 18_000.0);
    }

    #[test]
    fn test_marketing_is_always_overconfident() {
        let scenario = Scenario::new("s-1", "Any scenario");
        let output = evaluate(&scenario);
        assert!(output.is_overconfident(&RuleThresholds::default()));
    }

    #[test]
    fn test_zero_budget_means_zero_ask() {
        let scenario = Scenario::new("s-1", "Nothing to spend");
        let output = evaluate(&scenario);
        assert_eq!(output.required_budget, 0.0);
    }
}
