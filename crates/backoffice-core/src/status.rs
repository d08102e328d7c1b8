//! Traffic-light verdict derived from a run result.
//!
//! A consumer-facing reduction: it holds no state of its own and is
//! re-derivable from the [`RunResult`] at any time.

use serde::{Deserialize, Serialize};

use crate::domain::{PolicyStatus, RunResult};

/// Three-valued verdict for human consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Go,
    NeedsHuman,
    Stop,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Go => write!(f, "GO"),
            Self::NeedsHuman => write!(f, "NEEDS HUMAN"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

/// Verdict plus a one-line hint for the reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeStatus {
    pub verdict: Verdict,
    pub hint: &'static str,
}

/// Reduce a run result to a single verdict.
///
/// Precedence, first match wins: a `blocked` policy finding stops the
/// run; a `needs_approval` finding or any conflict at all asks for a
/// human; otherwise go.
pub fn classify(result: &RunResult) -> OfficeStatus {
    if result.has_finding(PolicyStatus::Blocked) {
        return OfficeStatus {
            verdict: Verdict::Stop,
            hint: "This breaks company rules.",
        };
    }
    if result.has_finding(PolicyStatus::NeedsApproval) {
        return OfficeStatus {
            verdict: Verdict::NeedsHuman,
            hint: "Someone must sign off.",
        };
    }
    if !result.conflicts.is_empty() {
        return OfficeStatus {
            verdict: Verdict::NeedsHuman,
            hint: "People need to choose a trade-off.",
        };
    }
    OfficeStatus {
        verdict: Verdict::Go,
        hint: "No obvious fire, for now.",
    }
}
