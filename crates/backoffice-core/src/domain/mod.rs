//! Domain model for the backoffice pipeline.
//!
//! Everything here is an immutable value: scenarios come in, agent
//! outputs, conflicts, policy findings, and run results come out.
//! Validation happens once at the boundary; derived facts are never
//! mutated after they are produced.

pub mod agent;
pub mod digest;
pub mod error;
pub mod run;
pub mod scenario;

pub use agent::{find_agent, Action, AgentId, AgentOutput, Proposal};
pub use digest::run_digest;
pub use error::{OfficeError, Result, ValidationError};
pub use run::{Conflict, PolicyFinding, PolicyStatus, RunResult, Severity};
pub use scenario::{Scenario, ScenarioConstraints};
