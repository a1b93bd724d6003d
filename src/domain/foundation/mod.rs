//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Prakriti Care domain.

mod auth;
mod errors;
mod ids;
mod rating;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AssessmentId, DietRecommendationId, FollowUpId, ProgressEntryId, QuestionId,
    ScheduleTemplateId, UserId,
};
pub use rating::{RatingBand, WellnessRating};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
