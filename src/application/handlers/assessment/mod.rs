//! Prakriti assessment command and query handlers.

mod get_current_assessment;
mod get_questions;
mod submit_assessment;

pub use get_current_assessment::{GetCurrentAssessmentHandler, GetCurrentAssessmentQuery};
pub use get_questions::GetQuestionsHandler;
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler};
