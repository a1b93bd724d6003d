//! Progress-tracking error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// A submitted value failed validation.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProgressError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProgressError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProgressError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProgressError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProgressError::ValidationFailed { message, .. } => message.clone(),
            ProgressError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProgressError {}

impl From<DomainError> for ProgressError {
    fn from(err: DomainError) -> Self {
        ProgressError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for ProgressError {
    fn from(err: ValidationError) -> Self {
        ProgressError::validation(err.field().to_string(), err.to_string())
    }
}
