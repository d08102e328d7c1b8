//! Derived facts and the aggregate result of one evaluation run.

use serde::{Deserialize, Serialize};

use super::agent::{AgentId, AgentOutput};

/// How serious a detected conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A detected tension between agents, or between an agent and the
/// scenario's constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub severity: Severity,
    /// Agent display names or role labels such as "Operations/CS"; 1..N.
    pub actors: Vec<String>,
    pub description: String,
}

impl Conflict {
    /// Whether the given agent is among this conflict's actors.
    ///
    /// Exact display-name equality — never a substring match.
    pub fn involves(&self, agent: AgentId) -> bool {
        self.actors.iter().any(|a| a == agent.name())
    }
}

/// Outcome class of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Allowed,
    NeedsApproval,
    Blocked,
}

impl std::fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::NeedsApproval => write!(f, "needs_approval"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// The outcome of checking the proposals against one compliance rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyFinding {
    pub status: PolicyStatus,
    pub reason: String,
}

/// Aggregate root for one evaluation run.
///
/// Constructed fresh on every orchestrator invocation, never partially
/// updated, immutable once returned. Nothing persists across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// One output per evaluator, in evaluation order.
    pub agents: Vec<AgentOutput>,
    /// Detector-defined order; may be empty.
    pub conflicts: Vec<Conflict>,
    /// Never empty — the gate emits a synthetic `allowed` finding when
    /// no rule fires.
    pub policy_findings: Vec<PolicyFinding>,
    /// Human-readable explanatory lines; empty means "no issues".
    pub post_mortem: Vec<String>,
}

impl RunResult {
    /// Whether any finding carries the given status.
    pub fn has_finding(&self, status: PolicyStatus) -> bool {
        self.policy_findings.iter().any(|f| f.status == status)
    }
}
