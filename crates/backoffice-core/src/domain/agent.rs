//! Agent identity and the structured output every evaluator produces.

use serde::{Deserialize, Serialize};

use crate::config::RuleThresholds;

/// Fixed set of backoffice agent identities.
///
/// Only Marketing, Sales, and Accounting are evaluated today;
/// CustomerSuccess and Operations are reserved for future evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    Marketing,
    Sales,
    CustomerSuccess,
    Operations,
    Accounting,
}

impl AgentId {
    /// Stable display name, also used as the actor label in conflicts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::CustomerSuccess => "CustomerSuccess",
            Self::Operations => "Operations",
            Self::Accounting => "Accounting",
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single concrete action inside a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Unique within the owning proposal; rules look actions up by id.
    pub id: String,
    /// Human-readable title shown to the reviewer.
    pub title: String,
    /// Direct cash cost of the action.
    pub cost: f64,
    /// Whether the action is sensitive enough to warrant policy review.
    #[serde(default)]
    pub policy_sensitive: bool,
    /// Typed discount fraction for discount actions. Carried alongside the
    /// display title so no consumer has to parse the percentage back out
    /// of the text. `None` means the action proposes no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
}

impl Action {
    pub fn new(id: impl Into<String>, title: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cost,
            policy_sensitive: false,
            discount_rate: None,
        }
    }

    pub fn policy_sensitive(mut self) -> Self {
        self.policy_sensitive = true;
        self
    }

    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = Some(rate);
        self
    }
}

/// What an agent proposes to do about the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub summary: String,
    /// Ordered; the order is part of the proposal.
    pub actions: Vec<Action>,
}

/// Structured output of one agent evaluator, produced once per run.
///
/// `confidence` and `evidence` are deliberately decoupled self-reports:
/// an agent may be certain without support, which is exactly what the
/// overconfidence rule looks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentOutput {
    pub agent: AgentId,
    /// Self-reported certainty in the proposal, 0.0–1.0.
    pub confidence: f64,
    /// Self-reported strength of supporting data, 0.0–1.0.
    pub evidence: f64,
    pub assumptions: Vec<String>,
    /// Data the agent would need in a real system; display only.
    pub missing_inputs: Vec<String>,
    pub kpi_local_goal: String,
    pub proposal: Proposal,
    /// Budget the agent asks for. Preserved exactly as reported — never
    /// reconciled against the sum of action costs.
    pub required_budget: f64,
    /// Free-text risk notes; display only.
    pub risks: Vec<String>,
}

impl AgentOutput {
    /// Whether this agent's self-reports match the overconfidence
    /// signature: high certainty with thin support.
    pub fn is_overconfident(&self, thresholds: &RuleThresholds) -> bool {
        self.confidence > thresholds.overconfidence_min_confidence
            && self.evidence < thresholds.overconfidence_max_evidence
    }

    /// The action with the given id, if the proposal contains one.
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.proposal.actions.iter().find(|a| a.id == id)
    }
}

/// Typed lookup of one agent's output in an evaluation run.
///
/// Identity is matched on [`AgentId`] equality, never on name substrings.
pub fn find_agent(agents: &[AgentOutput], id: AgentId) -> Option<&AgentOutput> {
    agents.iter().find(|a| a.agent == id)
}
