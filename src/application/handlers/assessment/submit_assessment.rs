//! SubmitAssessmentHandler - Command handler for scoring and storing answers.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{QuestionId, UserId};
use crate::domain::prakriti::{Assessment, AssessmentError, AssessmentFlow, Dosha};
use crate::ports::{AssessmentRepository, QuestionReader};

/// Command to submit a full set of answers.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub answers: Vec<(QuestionId, Dosha)>,
}

/// Handler for submitting assessments.
///
/// Replays the answers through an [`AssessmentFlow`] built from the active
/// question set, so the question count is always the store's count.
pub struct SubmitAssessmentHandler {
    questions: Arc<dyn QuestionReader>,
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(
        questions: Arc<dyn QuestionReader>,
        repository: Arc<dyn AssessmentRepository>,
    ) -> Self {
        Self {
            questions,
            repository,
        }
    }

    pub async fn handle(&self, cmd: SubmitAssessmentCommand) -> Result<Assessment, AssessmentError> {
        // 1. Load the active question set
        let questions = self.questions.list_active().await?;
        let mut flow = AssessmentFlow::new(questions);

        // 2. Apply answers; later answers for the same question replace earlier ones
        for (question_id, dosha) in cmd.answers {
            flow.answer(question_id, dosha)?;
        }
        debug!(
            user_id = %cmd.user_id,
            answered = flow.answered_count(),
            total = flow.total_questions(),
            "Assessment answers applied"
        );

        // 3. Score (rejects incomplete sets before anything is stored)
        let assessment = flow.submit(cmd.user_id)?;

        // 4. Persist
        self.repository.save(&assessment).await?;

        info!(
            user_id = %assessment.user_id(),
            assessment_id = %assessment.id(),
            dominant = %assessment.dominant(),
            "Assessment submitted"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentRepository, InMemoryQuestionReader};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::prakriti::{DominantDosha, DoshaScores, Question};
    use async_trait::async_trait;

    struct FailingAssessmentRepository;

    #[async_trait]
    impl AssessmentRepository for FailingAssessmentRepository {
        async fn save(&self, _assessment: &Assessment) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated insert failure"))
        }

        async fn find_latest_by_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<Assessment>, DomainError> {
            Ok(None)
        }

        async fn exists_for_user(&self, _user_id: &UserId) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn questions(n: i32) -> Vec<Question> {
        (1..=n)
            .map(|order| Question {
                id: QuestionId::new(),
                category: "Mental".to_string(),
                prompt: format!("Q{}", order),
                vata_option: "Quick".to_string(),
                pitta_option: "Sharp".to_string(),
                kapha_option: "Steady".to_string(),
                display_order: order,
            })
            .collect()
    }

    fn test_user_id() -> UserId {
        UserId::new("member-1").unwrap()
    }

    fn setup(n: i32) -> (Vec<Question>, Arc<InMemoryAssessmentRepository>, SubmitAssessmentHandler) {
        let qs = questions(n);
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(
            Arc::new(InMemoryQuestionReader::new(qs.clone())),
            repo.clone(),
        );
        (qs, repo, handler)
    }

    #[tokio::test]
    async fn scores_and_stores_complete_answers() {
        let (qs, repo, handler) = setup(3);
        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: vec![
                (qs[0].id, Dosha::Vata),
                (qs[1].id, Dosha::Pitta),
                (qs[2].id, Dosha::Vata),
            ],
        };

        let assessment = handler.handle(cmd).await.unwrap();

        assert_eq!(*assessment.scores(), DoshaScores::new(2, 1, 0));
        assert_eq!(assessment.dominant(), DominantDosha::Vata);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn incomplete_answers_are_rejected_without_insert() {
        let (qs, repo, handler) = setup(3);
        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: vec![(qs[0].id, Dosha::Kapha), (qs[1].id, Dosha::Kapha)],
        };

        let result = handler.handle(cmd).await;

        assert_eq!(result, Err(AssessmentError::incomplete(2, 3)));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn repeated_answers_count_once() {
        let (qs, repo, handler) = setup(2);
        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: vec![
                (qs[0].id, Dosha::Vata),
                (qs[0].id, Dosha::Pitta),
                (qs[1].id, Dosha::Pitta),
            ],
        };

        let assessment = handler.handle(cmd).await.unwrap();
        assert_eq!(*assessment.scores(), DoshaScores::new(0, 2, 0));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn unknown_question_is_rejected() {
        let (qs, repo, handler) = setup(1);
        let stray = QuestionId::new();
        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: vec![(qs[0].id, Dosha::Vata), (stray, Dosha::Kapha)],
        };

        let result = handler.handle(cmd).await;
        assert_eq!(result, Err(AssessmentError::UnknownQuestion(stray)));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn resubmission_appends_a_new_result() {
        let (qs, repo, handler) = setup(1);
        for dosha in [Dosha::Vata, Dosha::Kapha] {
            let cmd = SubmitAssessmentCommand {
                user_id: test_user_id(),
                answers: vec![(qs[0].id, dosha)],
            };
            handler.handle(cmd).await.unwrap();
        }
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_infrastructure_error() {
        let qs = questions(1);
        let handler = SubmitAssessmentHandler::new(
            Arc::new(InMemoryQuestionReader::new(qs.clone())),
            Arc::new(FailingAssessmentRepository),
        );
        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: vec![(qs[0].id, Dosha::Pitta)],
        };

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(AssessmentError::Infrastructure(_))));
    }
}
