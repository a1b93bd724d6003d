//! Assessment flow - the in-progress questionnaire for one user session.
//!
//! The flow owns the question list, the cursor and the answer set. Its
//! status is derived from how many distinct questions have an answer;
//! moving the cursor never changes it.
//!
//! ```text
//! Unanswered ──answer──► InProgress ──answer──► Complete ──submit──► Submitted
//!      └──────────────answer (single question)────────┘
//! ```

use serde::{Deserialize, Serialize};

use super::{sort_questions, AnswerSet, Assessment, AssessmentError, Dosha, Question};
use crate::domain::foundation::{QuestionId, StateMachine, UserId};

/// Lifecycle of an assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentFlowStatus {
    Unanswered,
    InProgress,
    Complete,
    Submitted,
}

impl StateMachine for AssessmentFlowStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentFlowStatus::*;
        matches!(
            (self, target),
            (Unanswered, InProgress)
                | (Unanswered, Complete)
                | (InProgress, Complete)
                | (Complete, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentFlowStatus::*;
        match self {
            Unanswered => vec![InProgress, Complete],
            InProgress => vec![Complete],
            Complete => vec![Submitted],
            Submitted => vec![],
        }
    }
}

/// One pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    questions: Vec<Question>,
    answers: AnswerSet,
    current_index: usize,
    status: AssessmentFlowStatus,
}

impl AssessmentFlow {
    /// Starts a flow over the given questions, sorted by display order.
    pub fn new(mut questions: Vec<Question>) -> Self {
        sort_questions(&mut questions);
        let status = if questions.is_empty() {
            AssessmentFlowStatus::Complete
        } else {
            AssessmentFlowStatus::Unanswered
        };
        Self {
            questions,
            answers: AnswerSet::new(),
            current_index: 0,
            status,
        }
    }

    /// A fresh flow over the same questions, used to retake the assessment.
    pub fn retake(&self) -> Self {
        Self::new(self.questions.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Answering
    // ─────────────────────────────────────────────────────────────────────────

    /// Records (or replaces) the answer to a question.
    ///
    /// # Errors
    ///
    /// - `UnknownQuestion` if the id is not part of this flow
    /// - `InvalidState` once the flow has been submitted
    pub fn answer(&mut self, question_id: QuestionId, dosha: Dosha) -> Result<(), AssessmentError> {
        if self.status == AssessmentFlowStatus::Submitted {
            return Err(AssessmentError::invalid_state(
                "assessment already submitted; start a new one to retake it",
            ));
        }
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(AssessmentError::UnknownQuestion(question_id));
        }

        self.answers.answer(question_id, dosha);
        self.refresh_status()
    }

    /// Answers the question under the cursor.
    pub fn answer_current(&mut self, dosha: Dosha) -> Result<(), AssessmentError> {
        let id = self
            .current_question()
            .map(|q| q.id)
            .ok_or_else(|| AssessmentError::invalid_state("no questions to answer"))?;
        self.answer(id, dosha)
    }

    fn refresh_status(&mut self) -> Result<(), AssessmentError> {
        let derived = if self.answers.len() == self.questions.len() {
            AssessmentFlowStatus::Complete
        } else if self.answers.is_empty() {
            AssessmentFlowStatus::Unanswered
        } else {
            AssessmentFlowStatus::InProgress
        };

        if derived != self.status {
            self.status = self.status.transition_to(derived)?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to the next question, staying on the last one.
    pub fn next(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    /// Moves to the previous question, staying on the first one.
    pub fn previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jumps to a question by position; out-of-range positions are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.questions.len() {
            self.current_index = index;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Progress
    // ─────────────────────────────────────────────────────────────────────────

    pub fn status(&self) -> AssessmentFlowStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Whole-number share of questions answered (100 for an empty set).
    pub fn progress_percent(&self) -> u8 {
        if self.questions.is_empty() {
            return 100;
        }
        ((self.answers.len() * 100) / self.questions.len()) as u8
    }

    pub fn can_submit(&self) -> bool {
        self.status == AssessmentFlowStatus::Complete
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Scores the answers into a new [`Assessment`] and closes the flow.
    ///
    /// # Errors
    ///
    /// - `Incomplete` while any question is unanswered (flow unchanged)
    /// - `InvalidState` if already submitted
    pub fn submit(&mut self, user_id: UserId) -> Result<Assessment, AssessmentError> {
        if self.status == AssessmentFlowStatus::Submitted {
            return Err(AssessmentError::invalid_state("assessment already submitted"));
        }

        let assessment =
            Assessment::submit(user_id, self.answers.clone(), self.questions.len())?;
        self.status = self.status.transition_to(AssessmentFlowStatus::Submitted)?;
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prakriti::DominantDosha;

    fn question(order: i32) -> Question {
        Question {
            id: QuestionId::new(),
            category: "Mental".to_string(),
            prompt: format!("Q{}", order),
            vata_option: "a".to_string(),
            pitta_option: "b".to_string(),
            kapha_option: "c".to_string(),
            display_order: order,
        }
    }

    fn flow(n: i32) -> AssessmentFlow {
        AssessmentFlow::new((1..=n).rev().map(question).collect())
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn new_flow_is_unanswered_and_sorted() {
        let flow = flow(3);
        assert_eq!(flow.status(), AssessmentFlowStatus::Unanswered);
        assert_eq!(flow.current_question().unwrap().display_order, 1);
    }

    #[test]
    fn empty_question_set_is_immediately_complete() {
        let flow = AssessmentFlow::new(vec![]);
        assert!(flow.can_submit());
        assert_eq!(flow.progress_percent(), 100);
    }

    #[test]
    fn answering_moves_through_states() {
        let mut flow = flow(2);
        flow.answer_current(Dosha::Vata).unwrap();
        assert_eq!(flow.status(), AssessmentFlowStatus::InProgress);
        assert_eq!(flow.progress_percent(), 50);

        flow.next();
        flow.answer_current(Dosha::Pitta).unwrap();
        assert_eq!(flow.status(), AssessmentFlowStatus::Complete);
        assert!(flow.can_submit());
    }

    #[test]
    fn single_question_goes_straight_to_complete() {
        let mut flow = flow(1);
        flow.answer_current(Dosha::Kapha).unwrap();
        assert_eq!(flow.status(), AssessmentFlowStatus::Complete);
    }

    #[test]
    fn navigation_does_not_change_status() {
        let mut flow = flow(3);
        flow.answer_current(Dosha::Vata).unwrap();
        let before = flow.status();

        flow.next();
        flow.next();
        flow.next();
        assert_eq!(flow.current_index(), 2);
        assert!(flow.is_last_question());
        flow.previous();
        flow.go_to(99);
        assert_eq!(flow.current_index(), 1);

        assert_eq!(flow.status(), before);
    }

    #[test]
    fn reanswering_does_not_advance_progress() {
        let mut flow = flow(2);
        flow.answer_current(Dosha::Vata).unwrap();
        flow.answer_current(Dosha::Kapha).unwrap();

        assert_eq!(flow.answered_count(), 1);
        assert_eq!(flow.status(), AssessmentFlowStatus::InProgress);
    }

    #[test]
    fn answering_unknown_question_is_rejected() {
        let mut flow = flow(2);
        let stray = QuestionId::new();
        assert_eq!(
            flow.answer(stray, Dosha::Vata),
            Err(AssessmentError::UnknownQuestion(stray))
        );
        assert_eq!(flow.status(), AssessmentFlowStatus::Unanswered);
    }

    #[test]
    fn submit_rejects_incomplete_flow_and_leaves_it_open() {
        let mut flow = flow(3);
        flow.answer_current(Dosha::Vata).unwrap();

        let result = flow.submit(user());
        assert_eq!(result, Err(AssessmentError::incomplete(1, 3)));
        assert_eq!(flow.status(), AssessmentFlowStatus::InProgress);
    }

    #[test]
    fn submit_produces_assessment_and_closes_flow() {
        let mut flow = flow(3);
        for dosha in [Dosha::Pitta, Dosha::Pitta, Dosha::Kapha] {
            flow.answer_current(dosha).unwrap();
            flow.next();
        }

        let assessment = flow.submit(user()).unwrap();
        assert_eq!(assessment.dominant(), DominantDosha::Pitta);
        assert_eq!(flow.status(), AssessmentFlowStatus::Submitted);

        assert!(flow.submit(user()).is_err());
        assert!(flow.answer_current(Dosha::Vata).is_err());
    }

    #[test]
    fn retake_starts_a_fresh_flow() {
        let mut flow = flow(1);
        flow.answer_current(Dosha::Vata).unwrap();
        flow.submit(user()).unwrap();

        let mut again = flow.retake();
        assert_eq!(again.status(), AssessmentFlowStatus::Unanswered);
        again.answer_current(Dosha::Kapha).unwrap();
        assert_eq!(again.submit(user()).unwrap().dominant(), DominantDosha::Kapha);
    }

    #[test]
    fn submitted_is_terminal() {
        assert!(AssessmentFlowStatus::Submitted.is_terminal());
        assert!(AssessmentFlowStatus::Complete
            .transition_to(AssessmentFlowStatus::InProgress)
            .is_err());
    }
}
