//! Sales evaluator: discounts as the answer to everything.
//!
//! Sales scans the scenario's free text for the configured high-value
//! phrase. Finding it switches the proposal from a moderate discount to
//! an aggressive one, with a confidence bump and an evidence drop.
//! Discounts are modeled as margin risk rather than cash spend, so the
//! required budget is always zero.

use crate::config::OfficeConfig;
use crate::domain::{Action, AgentId, AgentOutput, Proposal, Scenario};

/// Id of the discount action inside Sales' proposal. The conflict
/// detector and the policy gate both look this action up by id.
pub const DISCOUNT_ACTION_ID: &str = "sales-discount";

/// How long the offered discount stays open, in days.
pub const DISCOUNT_WINDOW_DAYS: u32 = 14;

const AGGRESSIVE_RATE: f64 = 0.30;
const MODERATE_RATE: f64 = 0.15;

/// Evaluate the scenario from Sales' point of view.
pub fn evaluate(scenario: &Scenario, config: &OfficeConfig) -> AgentOutput {
    let high_value = config.mentions_high_value(&scenario.free_text);

    let (discount_rate, confidence, evidence) = if high_value {
        (AGGRESSIVE_RATE, 0.82, 0.38)
    } else {
        (MODERATE_RATE, 0.68, 0.44)
    };

    let percent = (discount_rate * 100.0).round() as u32;

    AgentOutput {
        agent: AgentId::Sales,
        confidence,
        evidence,
        assumptions: vec![
            if high_value {
                "High value customers justify aggressive discounting".to_string()
            } else {
                "Moderate discounting improves close rate".to_string()
            },
            "Sales team can handle increased lead volume".to_string(),
            "Discounting won't trigger churn or reputational harm".to_string(),
        ],
        missing_inputs: vec![
            "Current conversion rate".to_string(),
            "Pipeline stage breakdown".to_string(),
        ],
        kpi_local_goal: "Increase conversion / bookings".to_string(),
        proposal: Proposal {
            summary: if high_value {
                "Prioritize closing high-value customers with aggressive offers.".to_string()
            } else {
                "Improve close rate with a limited-time discount.".to_string()
            },
            actions: vec![Action::new(
                DISCOUNT_ACTION_ID,
                format!("Offer {percent}% discount for {DISCOUNT_WINDOW_DAYS} days"),
                0.0,
            )
            .policy_sensitive()
            .with_discount_rate(discount_rate)],
        },
        // Discounts hit margins and cash later, not the budget line now.
        required_budget: 0.0,
        risks: vec![
            "Margin erosion".to_string(),
            "Cash risk if discounts stack".to_string(),
            "Trains customers to wait for discounts".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(free_text: &str) -> AgentOutput {
        let scenario = Scenario::new("s-1", "Sales check").with_free_text(free_text);
        evaluate(&scenario, &OfficeConfig::standard())
    }

    #[test]
    fn test_moderate_discount_without_high_value() {
        let output = run("Ordinary quarter, nothing special.");
        let action = output.action(DISCOUNT_ACTION_ID).unwrap();
        assert_eq!(action.discount_rate, Some(0.15));
        assert!(action.title.contains("15%"));
        assert_eq!(output.confidence, 0.68);
        assert_eq!(output.evidence, 0.44);
    }

    #[test]
    fn test_aggressive_discount_with_high_value() {
        let output = run("Two HIGH VALUE accounts are close to signing.");
        let action = output.action(DISCOUNT_ACTION_ID).unwrap();
        assert_eq!(action.discount_rate, Some(0.30));
        assert!(action.title.contains("30%"));
        assert_eq!(output.confidence, 0.82);
        assert_eq!(output.evidence, 0.38);
    }

    #[test]
    fn test_discount_action_is_policy_sensitive_and_free() {
        let output = run("Anything.");
        let action = output.action(DISCOUNT_ACTION_ID).unwrap();
        assert!(action.policy_sensitive);
        assert_eq!(action.cost, 0.0);
        assert_eq!(output.required_budget, 0.0);
    }
}
