//! Conflict detection across agent proposals.
//!
//! Inspects the full set of agent outputs plus the scenario and emits
//! pairwise/group conflicts. Rules run in a fixed sequence and each
//! appends at most one conflict, so a single run reports between zero
//! and three conflicts. An empty list is a valid, conflict-free result.

use crate::config::OfficeConfig;
use crate::domain::{find_agent, AgentId, AgentOutput, Conflict, Scenario, Severity};

use crate::agents::sales::DISCOUNT_ACTION_ID;

/// Role label for the support/operations side of growth conflicts.
/// Not an evaluated agent — the people absorbing the workload.
pub const OPS_CS_ROLE: &str = "Operations/CS";

/// Detect conflicts between the agents' proposals and the scenario.
///
/// Rule order is fixed and the output preserves it:
/// 1. growth vs capacity (Marketing against the support backlog),
/// 2. discounts vs cash (Sales against Accounting),
/// 3. overconfidence (any agent certain without support).
pub fn detect_conflicts(
    scenario: &Scenario,
    agents: &[AgentOutput],
    config: &OfficeConfig,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if let Some(c) = check_growth_vs_capacity(scenario, agents, config) {
        conflicts.push(c);
    }
    if let Some(c) = check_discount_vs_cash(scenario, agents, config) {
        conflicts.push(c);
    }
    if let Some(c) = check_overconfidence(agents, config) {
        conflicts.push(c);
    }

    conflicts
}

/// Marketing pushing paid growth while support is already drowning.
fn check_growth_vs_capacity(
    scenario: &Scenario,
    agents: &[AgentOutput],
    config: &OfficeConfig,
) -> Option<Conflict> {
    let marketing = find_agent(agents, AgentId::Marketing)?;

    if scenario.backlog_cs >= config.thresholds.backlog_pressure && marketing.required_budget > 0.0
    {
        return Some(Conflict {
            severity: Severity::High,
            actors: vec![AgentId::Marketing.name().to_string(), OPS_CS_ROLE.to_string()],
            description: format!(
                "Marketing wants {:.0} in new paid spend while the support backlog \
                 stands at {}. More growth now means more angry customers later.",
                marketing.required_budget, scenario.backlog_cs,
            ),
        });
    }
    None
}

/// Sales proposing a discount above the cap that Accounting has to fund.
///
/// Reads the typed discount rate off Sales' designated action. An absent
/// action or absent rate is "feature absent", not an error — the rule
/// simply does not fire. The two severity branches are mutually
/// exclusive by construction.
fn check_discount_vs_cash(
    scenario: &Scenario,
    agents: &[AgentOutput],
    config: &OfficeConfig,
) -> Option<Conflict> {
    let sales = find_agent(agents, AgentId::Sales)?;
    find_agent(agents, AgentId::Accounting)?;

    let discount_rate = sales.action(DISCOUNT_ACTION_ID)?.discount_rate?;
    if discount_rate <= scenario.constraints.discount_cap {
        return None;
    }

    let actors = vec![
        AgentId::Sales.name().to_string(),
        AgentId::Accounting.name().to_string(),
    ];
    let risky_context = scenario.backlog_cs >= config.thresholds.backlog_pressure;

    if risky_context {
        Some(Conflict {
            severity: Severity::High,
            actors,
            description: format!(
                "Sales proposes a {:.0}% discount over the {:.0}% cap while the \
                 operation is already strained. Discounts during chaos make the \
                 chaos more expensive.",
                discount_rate * 100.0,
                scenario.constraints.discount_cap * 100.0,
            ),
        })
    } else {
        Some(Conflict {
            severity: Severity::Medium,
            actors,
            description: format!(
                "Sales proposes a {:.0}% discount over the {:.0}% cap. Accounting \
                 wants approval before margins take the hit.",
                discount_rate * 100.0,
                scenario.constraints.discount_cap * 100.0,
            ),
        })
    }
}

/// Any agent reporting high certainty on thin support.
fn check_overconfidence(agents: &[AgentOutput], config: &OfficeConfig) -> Option<Conflict> {
    let overconfident: Vec<&AgentOutput> = agents
        .iter()
        .filter(|a| a.is_overconfident(&config.thresholds))
        .collect();

    if overconfident.is_empty() {
        return None;
    }

    let names: Vec<&str> = overconfident.iter().map(|a| a.agent.name()).collect();
    Some(Conflict {
        severity: Severity::Medium,
        actors: names.iter().map(|n| n.to_string()).collect(),
        description: format!(
            "{} report high confidence with little supporting evidence. \
             Big confidence, little proof.",
            names.join(", "),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents;

    fn make_scenario(backlog: u32, discount_cap: f64, free_text: &str) -> Scenario {
        Scenario::new("s-1", "Conflict check")
            .with_backlog(backlog)
            .with_monthly_budget(60_000.0)
            .with_constraints(false, discount_cap)
            .with_free_text(free_text)
    }

    fn detect(scenario: &Scenario) -> Vec<Conflict> {
        let config = OfficeConfig::standard();
        let outputs = agents::evaluate_all(scenario, &config);
        detect_conflicts(scenario, &outputs, &config)
    }

    #[test]
    fn test_growth_conflict_requires_backlog_pressure() {
        let calm = make_scenario(99, 1.0, "");
        assert!(!detect(&calm)
            .iter()
            .any(|c| c.actors.contains(&OPS_CS_ROLE.to_string())));

        let strained = make_scenario(100, 1.0, "");
        let conflicts = detect(&strained);
        let growth = conflicts
            .iter()
            .find(|c| c.actors.contains(&OPS_CS_ROLE.to_string()))
            .expect("growth conflict");
        assert_eq!(growth.severity, Severity::High);
        assert!(growth.involves(AgentId::Marketing));
    }

    #[test]
    fn test_growth_conflict_requires_budget_ask() {
        // Zero monthly budget means Marketing asks for nothing.
        let scenario = make_scenario(500, 1.0, "").with_monthly_budget(0.0);
        assert!(!detect(&scenario)
            .iter()
            .any(|c| c.actors.contains(&OPS_CS_ROLE.to_string())));
    }

    #[test]
    fn test_discount_conflict_medium_in_calm_context() {
        // 15% discount over a 10% cap, backlog quiet.
        let scenario = make_scenario(0, 0.10, "");
        let conflicts = detect(&scenario);
        let discount = conflicts
            .iter()
            .find(|c| c.involves(AgentId::Sales) && c.involves(AgentId::Accounting))
            .expect("discount conflict");
        assert_eq!(discount.severity, Severity::Medium);
    }

    #[test]
    fn test_discount_conflict_high_under_pressure() {
        let scenario = make_scenario(200, 0.10, "");
        let conflicts = detect(&scenario);
        let discount = conflicts
            .iter()
            .find(|c| c.involves(AgentId::Sales) && c.involves(AgentId::Accounting))
            .expect("discount conflict");
        assert_eq!(discount.severity, Severity::High);
    }

    #[test]
    fn test_discount_at_cap_is_not_a_conflict() {
        // Comparison is strictly greater-than.
        let scenario = make_scenario(0, 0.15, "");
        assert!(!detect(&scenario)
            .iter()
            .any(|c| c.involves(AgentId::Sales) && c.involves(AgentId::Accounting)));
    }

    #[test]
    fn test_overconfidence_names_marketing() {
        // Marketing's 0.86/0.32 signature always qualifies.
        let conflicts = detect(&make_scenario(0, 1.0, ""));
        let over = conflicts
            .iter()
            .find(|c| c.severity == Severity::Medium && c.involves(AgentId::Marketing))
            .expect("overconfidence conflict");
        assert!(over.description.contains("Marketing"));
    }

    #[test]
    fn test_overconfidence_collects_all_qualifying_agents() {
        // "high value" flips Sales to 0.82/0.38, which also qualifies.
        let conflicts = detect(&make_scenario(0, 1.0, "high value accounts waiting"));
        let over = conflicts
            .iter()
            .find(|c| c.involves(AgentId::Marketing) && c.involves(AgentId::Sales))
            .expect("joint overconfidence conflict");
        assert_eq!(over.actors.len(), 2);
    }

    #[test]
    fn test_rule_order_is_preserved() {
        // All three rules fire: growth first, discount second, overconfidence last.
        let scenario = make_scenario(400, 0.10, "");
        let conflicts = detect(&scenario);
        assert_eq!(conflicts.len(), 3);
        assert!(conflicts[0].actors.contains(&OPS_CS_ROLE.to_string()));
        assert!(conflicts[1].involves(AgentId::Sales));
        assert!(conflicts[2].involves(AgentId::Marketing));
    }

    #[test]
    fn test_no_conflicts_is_empty_not_error() {
        // Marketing always qualifies as overconfident, so leave it out
        // to get a genuinely conflict-free run.
        let scenario = make_scenario(0, 1.0, "");
        let config = OfficeConfig::standard();
        let outputs: Vec<_> = agents::evaluate_all(&scenario, &config)
            .into_iter()
            .filter(|a| a.agent != AgentId::Marketing)
            .collect();
        assert!(detect_conflicts(&scenario, &outputs, &config).is_empty());
    }

    #[test]
    fn test_missing_discount_rate_fails_silently() {
        let scenario = make_scenario(0, 0.01, "");
        let config = OfficeConfig::standard();
        let mut outputs = agents::evaluate_all(&scenario, &config);
        for output in &mut outputs {
            for action in &mut output.proposal.actions {
                action.discount_rate = None;
            }
        }
        assert!(!detect_conflicts(&scenario, &outputs, &config)
            .iter()
            .any(|c| c.involves(AgentId::Sales) && c.involves(AgentId::Accounting)));
    }
}
