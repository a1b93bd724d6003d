//! JSON error bodies and status code mapping shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::follow_up::FollowUpError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::prakriti::AssessmentError;
use crate::domain::profile::ProfileError;
use crate::domain::progress::ProgressError;
use crate::domain::recommendation::RecommendationError;

/// Standard error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::IncompleteAssessment => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound
        | ErrorCode::AssessmentNotFound
        | ErrorCode::FollowUpNotFound
        | ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyCompleted => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned from HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: status_for(code),
            body: ErrorResponse::new(code, message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::bad_request(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.body = self.body.with_details(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store failures are logged here; the body never carries driver text.
        if self.status.is_server_error() {
            tracing::error!(code = %self.body.code, "{}", self.body.message);
            let body = ErrorResponse::new(ErrorCode::InternalError, "An unexpected error occurred");
            return (self.status, Json(body)).into_response();
        }
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::new(err.code, err.message)
    }
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        let api = ApiError::new(err.code(), err.message());
        match err {
            AssessmentError::Incomplete { answered, total } => {
                api.with_details(serde_json::json!({ "answered": answered, "total": total }))
            }
            _ => api,
        }
    }
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        ApiError::new(err.code(), err.message())
    }
}

impl From<FollowUpError> for ApiError {
    fn from(err: FollowUpError) -> Self {
        ApiError::new(err.code(), err.message())
    }
}

impl From<ProgressError> for ApiError {
    fn from(err: ProgressError) -> Self {
        ApiError::new(err.code(), err.message())
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        ApiError::new(err.code(), err.message())
    }
}
