//! GetDashboardHandler - the member's landing summary.

use std::sync::Arc;

use tracing::debug;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{AssessmentRepository, FollowUpRepository};

#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
}

pub struct GetDashboardHandler {
    assessments: Arc<dyn AssessmentRepository>,
    follow_ups: Arc<dyn FollowUpRepository>,
}

impl GetDashboardHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        follow_ups: Arc<dyn FollowUpRepository>,
    ) -> Self {
        Self {
            assessments,
            follow_ups,
        }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardSummary, DomainError> {
        let current = self.assessments.find_latest_by_user(&query.user_id).await?;
        let pending = self.follow_ups.count_pending(&query.user_id).await?;
        debug!(user_id = %query.user_id, has_assessment = current.is_some(), pending, "Dashboard built");
        Ok(DashboardSummary::build(current.as_ref(), pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentRepository, InMemoryFollowUpRepository};
    use crate::domain::follow_up::{FollowUp, FollowUpType};
    use crate::domain::foundation::{QuestionId, Timestamp};
    use crate::domain::prakriti::{AnswerSet, Assessment, DominantDosha, Dosha};

    fn user() -> UserId {
        UserId::new("member-1").unwrap()
    }

    #[tokio::test]
    async fn new_member_has_empty_dashboard() {
        let handler = GetDashboardHandler::new(
            Arc::new(InMemoryAssessmentRepository::new()),
            Arc::new(InMemoryFollowUpRepository::new()),
        );
        let summary = handler.handle(GetDashboardQuery { user_id: user() }).await.unwrap();
        assert!(!summary.has_assessment);
        assert_eq!(summary.pending_follow_ups, 0);
    }

    #[tokio::test]
    async fn counts_only_pending_follow_ups() {
        let assessments = Arc::new(InMemoryAssessmentRepository::new());
        let answers: AnswerSet = vec![(QuestionId::new(), Dosha::Vata)].into_iter().collect();
        assessments
            .save(&Assessment::submit(user(), answers, 1).unwrap())
            .await
            .unwrap();

        let follow_ups = Arc::new(InMemoryFollowUpRepository::new());
        for done in [false, true, false] {
            let mut f = FollowUp::schedule(
                user(),
                FollowUpType::Reminder,
                "Reminder",
                None,
                Timestamp::now(),
                None,
            )
            .unwrap();
            if done {
                f.complete(Timestamp::now()).unwrap();
            }
            follow_ups.save(&f).await.unwrap();
        }

        let summary = GetDashboardHandler::new(assessments, follow_ups)
            .handle(GetDashboardQuery { user_id: user() })
            .await
            .unwrap();

        assert!(summary.has_assessment);
        assert_eq!(summary.dominant_dosha, Some(DominantDosha::Vata));
        assert_eq!(summary.pending_follow_ups, 2);
    }
}
