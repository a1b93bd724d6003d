//! Administrator follow-up handlers: schedule, delete and list for a member.
//!
//! Every handler checks the caller's administrator flag first. Any failure
//! of that lookup denies access.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::follow_up::{FollowUp, FollowUpError, FollowUpType};
use crate::domain::foundation::{FollowUpId, Timestamp, UserId};
use crate::ports::{AccessChecker, FollowUpRepository};

async fn require_admin(access: &dyn AccessChecker, user_id: &UserId) -> Result<(), FollowUpError> {
    match access.is_admin(user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(FollowUpError::forbidden()),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Admin lookup failed; denying access");
            Err(FollowUpError::forbidden())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Create
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CreateFollowUpCommand {
    pub admin_id: UserId,
    pub user_id: UserId,
    pub follow_up_type: FollowUpType,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_date: Timestamp,
}

pub struct CreateFollowUpHandler {
    access: Arc<dyn AccessChecker>,
    repository: Arc<dyn FollowUpRepository>,
}

impl CreateFollowUpHandler {
    pub fn new(access: Arc<dyn AccessChecker>, repository: Arc<dyn FollowUpRepository>) -> Self {
        Self { access, repository }
    }

    pub async fn handle(&self, cmd: CreateFollowUpCommand) -> Result<FollowUp, FollowUpError> {
        require_admin(self.access.as_ref(), &cmd.admin_id).await?;

        let follow_up = FollowUp::schedule(
            cmd.user_id,
            cmd.follow_up_type,
            cmd.title,
            cmd.description,
            cmd.scheduled_date,
            Some(cmd.admin_id.clone()),
        )?;
        self.repository.save(&follow_up).await?;

        info!(
            follow_up_id = %follow_up.id(),
            user_id = %follow_up.user_id(),
            admin_id = %cmd.admin_id,
            "Follow-up scheduled"
        );
        Ok(follow_up)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Delete
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct DeleteFollowUpCommand {
    pub admin_id: UserId,
    pub follow_up_id: FollowUpId,
}

pub struct DeleteFollowUpHandler {
    access: Arc<dyn AccessChecker>,
    repository: Arc<dyn FollowUpRepository>,
}

impl DeleteFollowUpHandler {
    pub fn new(access: Arc<dyn AccessChecker>, repository: Arc<dyn FollowUpRepository>) -> Self {
        Self { access, repository }
    }

    pub async fn handle(&self, cmd: DeleteFollowUpCommand) -> Result<(), FollowUpError> {
        require_admin(self.access.as_ref(), &cmd.admin_id).await?;

        if self.repository.find_by_id(&cmd.follow_up_id).await?.is_none() {
            return Err(FollowUpError::not_found(cmd.follow_up_id));
        }
        self.repository.delete(&cmd.follow_up_id).await?;

        info!(follow_up_id = %cmd.follow_up_id, admin_id = %cmd.admin_id, "Follow-up deleted");
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// List for member
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ListUserFollowUpsQuery {
    pub admin_id: UserId,
    pub user_id: UserId,
}

pub struct ListUserFollowUpsHandler {
    access: Arc<dyn AccessChecker>,
    repository: Arc<dyn FollowUpRepository>,
}

impl ListUserFollowUpsHandler {
    pub fn new(access: Arc<dyn AccessChecker>, repository: Arc<dyn FollowUpRepository>) -> Self {
        Self { access, repository }
    }

    /// All of the member's follow-ups, scheduled date ascending.
    pub async fn handle(&self, query: ListUserFollowUpsQuery) -> Result<Vec<FollowUp>, FollowUpError> {
        require_admin(self.access.as_ref(), &query.admin_id).await?;
        Ok(self.repository.list_by_user(&query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryFollowUpRepository, InMemoryProfileRepository};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::profile::Profile;
    use async_trait::async_trait;

    struct BrokenAccessChecker;

    #[async_trait]
    impl AccessChecker for BrokenAccessChecker {
        async fn is_admin(&self, _user_id: &UserId) -> Result<bool, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }
    }

    fn admin() -> UserId {
        UserId::new("admin-1").unwrap()
    }

    fn member() -> UserId {
        UserId::new("member-1").unwrap()
    }

    async fn profiles() -> Arc<InMemoryProfileRepository> {
        let repo = Arc::new(InMemoryProfileRepository::new());
        repo.insert(Profile::new(admin(), "Admin", "admin@example.com").with_admin(true))
            .await;
        repo.insert(Profile::new(member(), "Member", "member@example.com"))
            .await;
        repo
    }

    fn create_cmd(caller: UserId, title: &str) -> CreateFollowUpCommand {
        CreateFollowUpCommand {
            admin_id: caller,
            user_id: member(),
            follow_up_type: FollowUpType::CheckIn,
            title: title.to_string(),
            description: Some("Two weeks in".to_string()),
            scheduled_date: Timestamp::now().plus_days(14),
        }
    }

    #[tokio::test]
    async fn admin_creates_follow_up_for_member() {
        let repo = Arc::new(InMemoryFollowUpRepository::new());
        let handler = CreateFollowUpHandler::new(profiles().await, repo.clone());

        let created = handler.handle(create_cmd(admin(), "Check in")).await.unwrap();

        assert_eq!(created.user_id(), &member());
        assert_eq!(created.created_by(), Some(&admin()));
        assert!(repo.get(created.id()).await.is_some());
    }

    #[tokio::test]
    async fn member_cannot_create() {
        let repo = Arc::new(InMemoryFollowUpRepository::new());
        let handler = CreateFollowUpHandler::new(profiles().await, repo.clone());

        let result = handler.handle(create_cmd(member(), "Sneaky")).await;
        assert_eq!(result, Err(FollowUpError::Forbidden));
        assert_eq!(repo.count_pending(&member()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let handler = CreateFollowUpHandler::new(
            profiles().await,
            Arc::new(InMemoryFollowUpRepository::new()),
        );
        let result = handler.handle(create_cmd(admin(), "  ")).await;
        assert!(matches!(result, Err(FollowUpError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn failed_admin_lookup_denies() {
        let handler = CreateFollowUpHandler::new(
            Arc::new(BrokenAccessChecker),
            Arc::new(InMemoryFollowUpRepository::new()),
        );
        let result = handler.handle(create_cmd(admin(), "Check in")).await;
        assert_eq!(result, Err(FollowUpError::Forbidden));
    }

    #[tokio::test]
    async fn admin_deletes_and_member_cannot() {
        let access = profiles().await;
        let repo = Arc::new(InMemoryFollowUpRepository::new());
        let created = CreateFollowUpHandler::new(access.clone(), repo.clone())
            .handle(create_cmd(admin(), "Check in"))
            .await
            .unwrap();
        let handler = DeleteFollowUpHandler::new(access, repo.clone());

        let denied = handler
            .handle(DeleteFollowUpCommand {
                admin_id: member(),
                follow_up_id: *created.id(),
            })
            .await;
        assert_eq!(denied, Err(FollowUpError::Forbidden));

        handler
            .handle(DeleteFollowUpCommand {
                admin_id: admin(),
                follow_up_id: *created.id(),
            })
            .await
            .unwrap();
        assert!(repo.get(created.id()).await.is_none());
    }

    #[tokio::test]
    async fn deleting_unknown_is_not_found() {
        let handler = DeleteFollowUpHandler::new(
            profiles().await,
            Arc::new(InMemoryFollowUpRepository::new()),
        );
        let id = FollowUpId::new();
        let result = handler
            .handle(DeleteFollowUpCommand {
                admin_id: admin(),
                follow_up_id: id,
            })
            .await;
        assert_eq!(result, Err(FollowUpError::NotFound(id)));
    }

    #[tokio::test]
    async fn admin_lists_member_follow_ups() {
        let access = profiles().await;
        let repo = Arc::new(InMemoryFollowUpRepository::new());
        let create = CreateFollowUpHandler::new(access.clone(), repo.clone());
        create.handle(create_cmd(admin(), "First")).await.unwrap();
        create.handle(create_cmd(admin(), "Second")).await.unwrap();

        let handler = ListUserFollowUpsHandler::new(access, repo);
        let list = handler
            .handle(ListUserFollowUpsQuery {
                admin_id: admin(),
                user_id: member(),
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 2);

        let denied = handler
            .handle(ListUserFollowUpsQuery {
                admin_id: member(),
                user_id: member(),
            })
            .await;
        assert_eq!(denied, Err(FollowUpError::Forbidden));
    }
}
