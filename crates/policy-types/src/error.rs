//! Error types for parsing wire values into the closed choice sets

/// Errors raised when external text does not name a known choice
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyTypesError {
    #[error("Unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("Invalid wizard step: {0} (expected 1-4)")]
    InvalidStep(u8),
}

impl PolicyTypesError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Result type alias for parsing operations
pub type PolicyTypesResult<T> = Result<T, PolicyTypesError>;
