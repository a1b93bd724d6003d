//! Access control port for administrator-only operations.
//!
//! # Design
//!
//! The AccessChecker is fail-secure: callers treat any error as denial.
//! The administrator flag is stored on the profile and only read here.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Whether the user carries the administrator flag.
    ///
    /// Unknown users are not administrators.
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
