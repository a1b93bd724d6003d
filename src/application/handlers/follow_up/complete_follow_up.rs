//! CompleteFollowUpHandler - Command handler for a member ticking off a follow-up.

use std::sync::Arc;

use tracing::info;

use crate::domain::follow_up::{FollowUp, FollowUpError};
use crate::domain::foundation::{FollowUpId, Timestamp, UserId};
use crate::ports::FollowUpRepository;

#[derive(Debug, Clone)]
pub struct CompleteFollowUpCommand {
    pub follow_up_id: FollowUpId,
    pub user_id: UserId,
}

pub struct CompleteFollowUpHandler {
    repository: Arc<dyn FollowUpRepository>,
}

impl CompleteFollowUpHandler {
    pub fn new(repository: Arc<dyn FollowUpRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteFollowUpCommand) -> Result<FollowUp, FollowUpError> {
        // 1. Load
        let mut follow_up = self
            .repository
            .find_by_id(&cmd.follow_up_id)
            .await?
            .ok_or_else(|| FollowUpError::not_found(cmd.follow_up_id))?;

        // 2. Authorize - only the owner completes their follow-ups
        if !follow_up.is_owned_by(&cmd.user_id) {
            return Err(FollowUpError::forbidden());
        }

        // 3. Complete and persist
        follow_up.complete(Timestamp::now())?;
        self.repository.update(&follow_up).await?;

        info!(follow_up_id = %cmd.follow_up_id, user_id = %cmd.user_id, "Follow-up completed");
        Ok(follow_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFollowUpRepository;
    use crate::domain::follow_up::FollowUpType;

    fn owner() -> UserId {
        UserId::new("member-1").unwrap()
    }

    async fn setup() -> (Arc<InMemoryFollowUpRepository>, FollowUpId) {
        let repo = Arc::new(InMemoryFollowUpRepository::new());
        let f = FollowUp::schedule(
            owner(),
            FollowUpType::CheckIn,
            "Check in",
            None,
            Timestamp::now(),
            None,
        )
        .unwrap();
        let id = *f.id();
        repo.save(&f).await.unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn completes_and_persists() {
        let (repo, id) = setup().await;
        let handler = CompleteFollowUpHandler::new(repo.clone());

        let done = handler
            .handle(CompleteFollowUpCommand {
                follow_up_id: id,
                user_id: owner(),
            })
            .await
            .unwrap();

        assert!(done.is_completed());
        let stored = repo.get(&id).await.unwrap();
        assert!(stored.is_completed());
        assert!(stored.completed_at().is_some());
    }

    #[tokio::test]
    async fn second_completion_is_rejected() {
        let (repo, id) = setup().await;
        let handler = CompleteFollowUpHandler::new(repo);
        let cmd = CompleteFollowUpCommand {
            follow_up_id: id,
            user_id: owner(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;
        assert_eq!(result, Err(FollowUpError::AlreadyCompleted(id)));
    }

    #[tokio::test]
    async fn other_members_cannot_complete() {
        let (repo, id) = setup().await;
        let handler = CompleteFollowUpHandler::new(repo.clone());

        let result = handler
            .handle(CompleteFollowUpCommand {
                follow_up_id: id,
                user_id: UserId::new("intruder").unwrap(),
            })
            .await;

        assert_eq!(result, Err(FollowUpError::Forbidden));
        assert!(!repo.get(&id).await.unwrap().is_completed());
    }

    #[tokio::test]
    async fn unknown_follow_up_is_not_found() {
        let handler = CompleteFollowUpHandler::new(Arc::new(InMemoryFollowUpRepository::new()));
        let id = FollowUpId::new();
        let result = handler
            .handle(CompleteFollowUpCommand {
                follow_up_id: id,
                user_id: owner(),
            })
            .await;
        assert_eq!(result, Err(FollowUpError::NotFound(id)));
    }
}
