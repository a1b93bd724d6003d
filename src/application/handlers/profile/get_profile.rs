//! GetProfileHandler - Query handler for the caller's own profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, ProfileError> {
        self.repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or(ProfileError::NotFound(query.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;

    #[tokio::test]
    async fn returns_stored_profile() {
        let user = UserId::new("member-1").unwrap();
        let repo = Arc::new(InMemoryProfileRepository::new());
        repo.insert(Profile::new(user.clone(), "Asha", "asha@example.com")).await;

        let profile = GetProfileHandler::new(repo)
            .handle(GetProfileQuery { user_id: user })
            .await
            .unwrap();
        assert_eq!(profile.full_name(), "Asha");
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let user = UserId::new("ghost").unwrap();
        let result = GetProfileHandler::new(Arc::new(InMemoryProfileRepository::new()))
            .handle(GetProfileQuery {
                user_id: user.clone(),
            })
            .await;
        assert_eq!(result, Err(ProfileError::NotFound(user)));
    }
}
