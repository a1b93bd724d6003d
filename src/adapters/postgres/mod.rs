//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresQuestionReader` - Active Prakriti questions
//! - `PostgresRecommendationReader` - Diet and schedule reference tables
//! - `PostgresAssessmentRepository` - Append-only assessment results
//! - `PostgresFollowUpRepository` - Member follow-ups
//! - `PostgresProgressRepository` - Progress tracking entries
//! - `PostgresProfileRepository` - Member profiles
//! - `PostgresAccessChecker` - Administrator flag lookup

mod access_checker_impl;
mod assessment_repository;
mod follow_up_repository;
mod profile_repository;
mod progress_repository;
mod question_reader;
mod recommendation_reader;

pub use access_checker_impl::PostgresAccessChecker;
pub use assessment_repository::PostgresAssessmentRepository;
pub use follow_up_repository::PostgresFollowUpRepository;
pub use profile_repository::PostgresProfileRepository;
pub use progress_repository::PostgresProgressRepository;
pub use question_reader::PostgresQuestionReader;
pub use recommendation_reader::PostgresRecommendationReader;

use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Reads one column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

/// Identity provider subjects are UUIDs; user columns are typed accordingly.
pub(crate) fn parse_user_id_as_uuid(user_id: &UserId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(user_id.as_str()).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("User ID must be a valid UUID: {}", e),
        )
    })
}

pub(crate) fn user_id_from_uuid(id: Uuid) -> Result<UserId, DomainError> {
    UserId::new(id.to_string()).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })
}

pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}
