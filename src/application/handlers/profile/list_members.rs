//! ListMembersHandler - administrator view of every non-admin profile.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::UserId;
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::{AccessChecker, ProfileRepository};

#[derive(Debug, Clone)]
pub struct ListMembersQuery {
    pub admin_id: UserId,
}

pub struct ListMembersHandler {
    access: Arc<dyn AccessChecker>,
    repository: Arc<dyn ProfileRepository>,
}

impl ListMembersHandler {
    pub fn new(access: Arc<dyn AccessChecker>, repository: Arc<dyn ProfileRepository>) -> Self {
        Self { access, repository }
    }

    /// Newest members first.
    pub async fn handle(&self, query: ListMembersQuery) -> Result<Vec<Profile>, ProfileError> {
        match self.access.is_admin(&query.admin_id).await {
            Ok(true) => {}
            Ok(false) => return Err(ProfileError::Forbidden),
            Err(e) => {
                warn!(user_id = %query.admin_id, error = %e, "Admin lookup failed; denying access");
                return Err(ProfileError::Forbidden);
            }
        }
        Ok(self.repository.list_members().await?)
    }
}
