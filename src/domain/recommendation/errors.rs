//! Recommendation-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building recommendation views.
///
/// An empty selection is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    /// The user has not completed an assessment yet.
    AssessmentRequired,
    /// Infrastructure error.
    Infrastructure(String),
}

impl RecommendationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RecommendationError::AssessmentRequired => ErrorCode::AssessmentNotFound,
            RecommendationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RecommendationError::AssessmentRequired => {
                "Please complete your Prakriti assessment first".to_string()
            }
            RecommendationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RecommendationError {}

impl From<DomainError> for RecommendationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AssessmentNotFound => RecommendationError::AssessmentRequired,
            _ => RecommendationError::Infrastructure(err.to_string()),
        }
    }
}
