//! Profile repository port.
//!
//! Profile rows are created by the identity provider's sign-up hook, so this
//! port only reads and updates them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by user ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Persist the editable fields and `updated_at`.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the row does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Non-administrator profiles, newest `created_at` first.
    async fn list_members(&self) -> Result<Vec<Profile>, DomainError>;
}
