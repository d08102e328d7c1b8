//! Domain-level error taxonomy for the backoffice pipeline.

/// Errors produced by scenario boundary validation.
///
/// A structurally invalid scenario is rejected before any agent runs —
/// there is no partial-result state.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("scenario id must not be empty")]
    EmptyScenarioId,

    #[error("monthly budget must be a finite non-negative number, got {0}")]
    InvalidMonthlyBudget(f64),

    #[error("discount cap must be within 0.0..=1.0, got {0}")]
    DiscountCapOutOfRange(f64),
}

/// Backoffice domain errors.
#[derive(Debug, thiserror::Error)]
pub enum OfficeError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for backoffice domain operations.
pub type Result<T> = std::result::Result<T, OfficeError>;
