//! Assessment aggregate - an immutable, submitted Prakriti result.
//!
//! Retaking the assessment creates a new `Assessment`; existing ones are
//! never mutated. A user's current result is the one with the latest
//! `assessed_at`.

use serde::{Deserialize, Serialize};

use super::{AnswerSet, AssessmentError, DominantDosha, DoshaScores, PrakritiScorer};
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

/// A submitted assessment result.
///
/// # Invariants
///
/// - created only from an answer set covering every active question
/// - `scores.total()` equals `answers.len()`
/// - `dominant` is the label derived from `scores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    scores: DoshaScores,
    dominant: DominantDosha,
    answers: AnswerSet,
    assessed_at: Timestamp,
}

impl Assessment {
    /// Scores a complete answer set into a new result.
    ///
    /// # Errors
    ///
    /// - `Incomplete` if the number of answers differs from
    ///   `total_question_count`
    pub fn submit(
        user_id: UserId,
        answers: AnswerSet,
        total_question_count: usize,
    ) -> Result<Self, AssessmentError> {
        if answers.len() != total_question_count {
            return Err(AssessmentError::incomplete(
                answers.len(),
                total_question_count,
            ));
        }

        let (scores, dominant) = PrakritiScorer::evaluate(&answers);

        Ok(Self {
            id: AssessmentId::new(),
            user_id,
            scores,
            dominant,
            answers,
            assessed_at: Timestamp::now(),
        })
    }

    /// Reconstitute an assessment from persistence (no validation).
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        scores: DoshaScores,
        dominant: DominantDosha,
        answers: AnswerSet,
        assessed_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            scores,
            dominant,
            answers,
            assessed_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn scores(&self) -> &DoshaScores {
        &self.scores
    }

    /// The full dominant label, composite labels included.
    pub fn dominant(&self) -> DominantDosha {
        self.dominant
    }

    /// The answers exactly as submitted, kept for audit.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn assessed_at(&self) -> &Timestamp {
        &self.assessed_at
    }

    /// Whether this result supersedes `other` as the user's current one.
    pub fn is_newer_than(&self, other: &Assessment) -> bool {
        self.assessed_at.is_after(&other.assessed_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::prakriti::Dosha;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn answers(doshas: &[Dosha]) -> AnswerSet {
        doshas.iter().map(|d| (QuestionId::new(), *d)).collect()
    }

    #[test]
    fn submit_scores_complete_answer_set() {
        let set = answers(&[Dosha::Vata, Dosha::Vata, Dosha::Pitta, Dosha::Pitta, Dosha::Kapha]);
        let assessment = Assessment::submit(user(), set.clone(), 5).unwrap();

        assert_eq!(assessment.scores(), &DoshaScores::new(2, 2, 1));
        assert_eq!(assessment.dominant(), DominantDosha::VataPitta);
        assert_eq!(assessment.answers(), &set);
        assert_eq!(assessment.user_id(), &user());
    }

    #[test]
    fn submit_rejects_partial_answer_set() {
        let result = Assessment::submit(user(), answers(&[Dosha::Kapha]), 3);
        assert_eq!(result, Err(AssessmentError::incomplete(1, 3)));
    }

    #[test]
    fn submit_rejects_answer_count_above_total() {
        let result = Assessment::submit(user(), answers(&[Dosha::Kapha, Dosha::Vata]), 1);
        assert!(matches!(result, Err(AssessmentError::Incomplete { .. })));
    }

    #[test]
    fn resubmission_creates_distinct_records() {
        let first = Assessment::submit(user(), answers(&[Dosha::Vata]), 1).unwrap();
        let second = Assessment::submit(user(), answers(&[Dosha::Kapha]), 1).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.dominant(), DominantDosha::Vata);
        assert_eq!(second.dominant(), DominantDosha::Kapha);
    }

    #[test]
    fn newest_assessment_is_current() {
        let older = Assessment::reconstitute(
            AssessmentId::new(),
            user(),
            DoshaScores::new(1, 0, 0),
            DominantDosha::Vata,
            AnswerSet::new(),
            Timestamp::now().minus_days(2),
        );
        let newer = Assessment::submit(user(), answers(&[Dosha::Pitta]), 1).unwrap();

        assert!(newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&newer));
    }
}
