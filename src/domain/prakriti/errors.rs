//! Assessment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};

/// Errors raised by the assessment flow and its handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Not every active question has an answer.
    Incomplete { answered: usize, total: usize },
    /// An answer referenced a question outside the active set.
    UnknownQuestion(QuestionId),
    /// Operation not allowed in the flow's current state.
    InvalidState(String),
    /// The user has no assessment on record.
    NotFound,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn incomplete(answered: usize, total: usize) -> Self {
        AssessmentError::Incomplete { answered, total }
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Incomplete { .. } => ErrorCode::IncompleteAssessment,
            AssessmentError::UnknownQuestion(_) => ErrorCode::ValidationFailed,
            AssessmentError::InvalidState(_) => ErrorCode::ValidationFailed,
            AssessmentError::NotFound => ErrorCode::AssessmentNotFound,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::Incomplete { answered, total } => format!(
                "Please answer all questions ({} of {} answered)",
                answered, total
            ),
            AssessmentError::UnknownQuestion(id) => format!("Unknown question: {}", id),
            AssessmentError::InvalidState(msg) => format!("Invalid state: {}", msg),
            AssessmentError::NotFound => {
                "Please complete your Prakriti assessment first".to_string()
            }
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AssessmentNotFound => AssessmentError::NotFound,
            ErrorCode::ValidationFailed => AssessmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
