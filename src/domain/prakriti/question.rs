//! Assessment question reference data.

use serde::{Deserialize, Serialize};

use super::Dosha;
use crate::domain::foundation::QuestionId;

/// A single Prakriti question with one option per dosha.
///
/// Questions are maintained outside this service and read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Grouping shown above the prompt, e.g. "Physical", "Mental".
    pub category: String,
    pub prompt: String,
    pub vata_option: String,
    pub pitta_option: String,
    pub kapha_option: String,
    /// Presentation and traversal order.
    pub display_order: i32,
}

impl Question {
    /// Option text for the given dosha.
    pub fn option_for(&self, dosha: Dosha) -> &str {
        match dosha {
            Dosha::Vata => &self.vata_option,
            Dosha::Pitta => &self.pitta_option,
            Dosha::Kapha => &self.kapha_option,
        }
    }

    /// The three options in canonical dosha order.
    pub fn options(&self) -> [(Dosha, &str); 3] {
        Dosha::ALL.map(|dosha| (dosha, self.option_for(dosha)))
    }
}

/// Sorts questions into traversal order (stable for equal display orders).
pub fn sort_questions(questions: &mut [Question]) {
    questions.sort_by_key(|q| q.display_order);
}
