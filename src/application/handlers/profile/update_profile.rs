//! UpdateProfileHandler - Command handler for editing the caller's profile.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::profile::{Profile, ProfileError, ProfileUpdate};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Profile, ProfileError> {
        // 1. Validate before touching the store
        let update = cmd.update.validate()?;

        // 2. Load
        let mut profile = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(cmd.user_id.clone()))?;

        // 3. Apply and persist
        profile.apply(update, Timestamp::now());
        self.repository.update(&profile).await?;

        info!(user_id = %cmd.user_id, "Profile updated");
        Ok(profile)
    }
}
