//! ListFollowUpsHandler - a member's follow-ups split into upcoming and completed.

use std::sync::Arc;

use crate::domain::follow_up::{FollowUpError, FollowUpOverview};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::FollowUpRepository;

#[derive(Debug, Clone)]
pub struct ListFollowUpsQuery {
    pub user_id: UserId,
}

pub struct ListFollowUpsHandler {
    repository: Arc<dyn FollowUpRepository>,
}

impl ListFollowUpsHandler {
    pub fn new(repository: Arc<dyn FollowUpRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListFollowUpsQuery) -> Result<FollowUpOverview, FollowUpError> {
        let follow_ups = self.repository.list_by_user(&query.user_id).await?;
        Ok(FollowUpOverview::build(follow_ups, &Timestamp::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFollowUpRepository;
    use crate::domain::follow_up::{FollowUp, FollowUpType};

    #[tokio::test]
    async fn splits_by_completion_in_schedule_order() {
        let user = UserId::new("member-1").unwrap();
        let now = Timestamp::now();
        let repo = Arc::new(InMemoryFollowUpRepository::new());

        let mut done = FollowUp::schedule(
            user.clone(),
            FollowUpType::Assessment,
            "Retake assessment",
            None,
            now.minus_days(10),
            None,
        )
        .unwrap();
        done.complete(now.minus_days(9)).unwrap();
        repo.save(&done).await.unwrap();

        for (title, days) in [("Next week", 7), ("Yesterday", -1)] {
            let f = FollowUp::schedule(
                user.clone(),
                FollowUpType::Reminder,
                title,
                None,
                now.plus_days(days),
                None,
            )
            .unwrap();
            repo.save(&f).await.unwrap();
        }

        let overview = ListFollowUpsHandler::new(repo)
            .handle(ListFollowUpsQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(overview.completed.len(), 1);
        let titles: Vec<_> = overview
            .upcoming
            .iter()
            .map(|u| u.follow_up.title())
            .collect();
        assert_eq!(titles, vec!["Yesterday", "Next week"]);
        assert!(overview.upcoming[0].overdue);
        assert!(!overview.upcoming[1].overdue);
    }
}
