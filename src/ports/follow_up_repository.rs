//! Follow-up repository port.

use async_trait::async_trait;

use crate::domain::follow_up::FollowUp;
use crate::domain::foundation::{DomainError, FollowUpId, UserId};

/// Repository port for FollowUp persistence.
#[async_trait]
pub trait FollowUpRepository: Send + Sync {
    /// Save a new follow-up.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, follow_up: &FollowUp) -> Result<(), DomainError>;

    /// Update completion fields of an existing follow-up.
    ///
    /// # Errors
    ///
    /// - `FollowUpNotFound` if the row does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, follow_up: &FollowUp) -> Result<(), DomainError>;

    /// Find a follow-up by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &FollowUpId) -> Result<Option<FollowUp>, DomainError>;

    /// All follow-ups for a user ordered by scheduled date ascending.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<FollowUp>, DomainError>;

    /// Number of the user's follow-ups not yet completed.
    async fn count_pending(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Delete a follow-up.
    ///
    /// # Errors
    ///
    /// - `FollowUpNotFound` if the row does not exist
    async fn delete(&self, id: &FollowUpId) -> Result<(), DomainError>;
}
