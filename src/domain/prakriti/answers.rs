//! Answer set: the user's chosen dosha per question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Dosha;
use crate::domain::foundation::QuestionId;

/// Mapping from question to the dosha tag of the chosen option.
///
/// One entry per question. Answering the same question again replaces
/// the earlier choice, so `len()` is the number of distinct questions
/// answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, Dosha>);

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the previous choice for that question.
    pub fn answer(&mut self, question_id: QuestionId, dosha: Dosha) -> Option<Dosha> {
        self.0.insert(question_id, dosha)
    }

    /// Returns the chosen dosha for a question, if answered.
    pub fn get(&self, question_id: &QuestionId) -> Option<Dosha> {
        self.0.get(question_id).copied()
    }

    /// Whether the question has been answered.
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.0.contains_key(question_id)
    }

    /// Number of distinct questions answered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Dosha)> {
        self.0.iter()
    }

    /// Iterates the chosen doshas only.
    pub fn choices(&self) -> impl Iterator<Item = Dosha> + '_ {
        self.0.values().copied()
    }
}

impl FromIterator<(QuestionId, Dosha)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Dosha)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (question_id, dosha) in iter {
            set.answer(question_id, dosha);
        }
        set
    }
}
