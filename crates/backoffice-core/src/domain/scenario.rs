//! Scenario input model and boundary validation.
//!
//! A [`Scenario`] is the single immutable input to one pipeline run. It is
//! validated once at the orchestrator boundary; inside the core the value
//! is trusted and only ever read.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Hard constraints the business has declared for a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConstraints {
    /// Whether compliance rules are non-negotiable for this scenario.
    pub compliance_strict: bool,
    /// Maximum discount the business tolerates, as a fraction (0.2 = 20%).
    pub discount_cap: f64,
}

/// Immutable description of the business conditions for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    /// Open customer-support backlog. High values signal operational strain.
    pub backlog_cs: u32,
    /// Monthly budget available across all departments.
    pub monthly_budget: f64,
    pub constraints: ScenarioConstraints,
    /// Free-form narrative; several rules scan this text.
    pub free_text: String,
}

impl Scenario {
    /// Create a scenario with zeroed numbers and permissive constraints.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            backlog_cs: 0,
            monthly_budget: 0.0,
            constraints: ScenarioConstraints {
                compliance_strict: false,
                discount_cap: 1.0,
            },
            free_text: String::new(),
        }
    }

    pub fn with_backlog(mut self, backlog_cs: u32) -> Self {
        self.backlog_cs = backlog_cs;
        self
    }

    pub fn with_monthly_budget(mut self, monthly_budget: f64) -> Self {
        self.monthly_budget = monthly_budget;
        self
    }

    pub fn with_constraints(mut self, compliance_strict: bool, discount_cap: f64) -> Self {
        self.constraints = ScenarioConstraints {
            compliance_strict,
            discount_cap,
        };
        self
    }

    pub fn with_free_text(mut self, free_text: impl Into<String>) -> Self {
        self.free_text = free_text.into();
        self
    }

    /// Validate the scenario's structural constraints.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyScenarioId`] — `id` is empty.
    /// - [`ValidationError::InvalidMonthlyBudget`] — budget is negative,
    ///   NaN, or infinite.
    /// - [`ValidationError::DiscountCapOutOfRange`] — cap outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyScenarioId);
        }
        if !self.monthly_budget.is_finite() || self.monthly_budget < 0.0 {
            return Err(ValidationError::InvalidMonthlyBudget(self.monthly_budget));
        }
        let cap = self.constraints.discount_cap;
        if !cap.is_finite() || !(0.0..=1.0).contains(&cap) {
            return Err(ValidationError::DiscountCapOutOfRange(cap));
        }
        Ok(())
    }
}
