//! GetCurrentAssessmentHandler - Query handler for a member's latest result.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::prakriti::{Assessment, AssessmentError};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct GetCurrentAssessmentQuery {
    pub user_id: UserId,
}

pub struct GetCurrentAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetCurrentAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Latest assessment by `assessed_at`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the member never submitted one
    pub async fn handle(
        &self,
        query: GetCurrentAssessmentQuery,
    ) -> Result<Assessment, AssessmentError> {
        self.repository
            .find_latest_by_user(&query.user_id)
            .await?
            .ok_or(AssessmentError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentRepository;
    use crate::domain::foundation::{AssessmentId, QuestionId, Timestamp};
    use crate::domain::prakriti::{AnswerSet, DominantDosha, Dosha, PrakritiScorer};

    fn assessment_at(user: &UserId, dosha: Dosha, at: Timestamp) -> Assessment {
        let answers: AnswerSet = vec![(QuestionId::new(), dosha)].into_iter().collect();
        let (scores, dominant) = PrakritiScorer::evaluate(&answers);
        Assessment::reconstitute(AssessmentId::new(), user.clone(), scores, dominant, answers, at)
    }

    #[tokio::test]
    async fn returns_latest_assessment() {
        let user = UserId::new("member-1").unwrap();
        let now = Timestamp::now();
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        repo.save(&assessment_at(&user, Dosha::Kapha, now)).await.unwrap();
        repo.save(&assessment_at(&user, Dosha::Vata, now.minus_days(7)))
            .await
            .unwrap();

        let handler = GetCurrentAssessmentHandler::new(repo);
        let current = handler
            .handle(GetCurrentAssessmentQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(current.dominant(), DominantDosha::Kapha);
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let handler = GetCurrentAssessmentHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let result = handler
            .handle(GetCurrentAssessmentQuery {
                user_id: UserId::new("member-1").unwrap(),
            })
            .await;
        assert_eq!(result, Err(AssessmentError::NotFound));
    }
}
