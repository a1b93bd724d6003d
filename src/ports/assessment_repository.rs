//! Assessment repository port.
//!
//! Assessments are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::prakriti::Assessment;

#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Insert a new assessment result.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// The user's assessment with the latest `assessed_at`, if any.
    async fn find_latest_by_user(&self, user_id: &UserId)
        -> Result<Option<Assessment>, DomainError>;

    /// Whether the user has submitted at least one assessment.
    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assessment_repository_accepts_dyn(_repo: &dyn AssessmentRepository) {}

    #[test]
    fn assessment_repository_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AssessmentRepository>();
    }
}
