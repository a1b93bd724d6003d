//! HTTP adapter for the Prakriti assessment.

mod dto;
mod handlers;
mod routes;

pub use dto::{AssessmentResponse, QuestionOptionResponse, QuestionResponse, SubmitAssessmentRequest};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
