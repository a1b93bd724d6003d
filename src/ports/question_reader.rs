//! Question reader port (read-only reference data).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::prakriti::Question;

/// Read access to the active Prakriti question set.
#[async_trait]
pub trait QuestionReader: Send + Sync {
    /// All active questions ordered by `display_order` ascending.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on store failure
    async fn list_active(&self) -> Result<Vec<Question>, DomainError>;
}
