//! Follow-up-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, FollowUpId, ValidationError};

/// Follow-up errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpError {
    /// Follow-up was not found.
    NotFound(FollowUpId),
    /// Caller does not own the follow-up or lacks the administrator flag.
    Forbidden,
    /// Follow-up was already completed.
    AlreadyCompleted(FollowUpId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl FollowUpError {
    pub fn not_found(id: FollowUpId) -> Self {
        FollowUpError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        FollowUpError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FollowUpError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        FollowUpError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            FollowUpError::NotFound(_) => ErrorCode::FollowUpNotFound,
            FollowUpError::Forbidden => ErrorCode::Forbidden,
            FollowUpError::AlreadyCompleted(_) => ErrorCode::AlreadyCompleted,
            FollowUpError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FollowUpError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            FollowUpError::NotFound(id) => format!("Follow-up not found: {}", id),
            FollowUpError::Forbidden => "Permission denied".to_string(),
            FollowUpError::AlreadyCompleted(id) => {
                format!("Follow-up already completed: {}", id)
            }
            FollowUpError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            FollowUpError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for FollowUpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FollowUpError {}

impl From<DomainError> for FollowUpError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => FollowUpError::Forbidden,
            ErrorCode::ValidationFailed => FollowUpError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => FollowUpError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for FollowUpError {
    fn from(err: ValidationError) -> Self {
        FollowUpError::validation(err.field().to_string(), err.to_string())
    }
}
