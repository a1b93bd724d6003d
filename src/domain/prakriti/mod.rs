//! Prakriti domain - constitution assessment and scoring.
//!
//! Answers are tallied per dosha, the tally is reduced to a dominant label
//! (possibly composite), and the label keys the diet and schedule
//! recommendations.
//!
//! # Components
//!
//! - `Dosha` / `DominantDosha` - category tags and result labels
//! - `AnswerSet` - one chosen dosha per question
//! - `PrakritiScorer` - scores and tie-break rules
//! - `Assessment` - immutable submitted result
//! - `AssessmentFlow` - questionnaire state for one pass

mod answers;
mod assessment;
mod dosha;
mod errors;
mod flow;
mod question;
mod scoring;

pub use answers::AnswerSet;
pub use assessment::Assessment;
pub use dosha::{DominantDosha, Dosha, LABEL_SEPARATOR};
pub use errors::AssessmentError;
pub use flow::{AssessmentFlow, AssessmentFlowStatus};
pub use question::{sort_questions, Question};
pub use scoring::{DoshaScores, PrakritiScorer};
