//! Progress tracking repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::ProgressEntry;

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn save(&self, entry: &ProgressEntry) -> Result<(), DomainError>;

    /// Newest tracking date first, at most `limit` entries.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, DomainError>;
}
