//! Wizard errors

use policy_gateway::StorageError;
use policy_types::WizardStep;
use thiserror::Error;

/// Result type for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Errors raised by the wizard controller.
///
/// Blocked step transitions are not errors; `advance` reports them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("finalize is only available on the review step (currently on {0})")]
    NotAtReview(WizardStep),

    #[error("step {0} is incomplete")]
    StepIncomplete(WizardStep),

    #[error("a save is already in flight")]
    SaveInFlight,

    #[error("policy has already been saved")]
    AlreadySaved,

    #[error("wizard session was closed")]
    SessionClosed,

    #[error("Failed to save policy: {0}")]
    Storage(#[from] StorageError),
}

impl WizardError {
    /// Failures the caller may retry without changing the draft
    pub fn is_retryable(&self) -> bool {
        matches!(self, WizardError::Storage(_))
    }
}
