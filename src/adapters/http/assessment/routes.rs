//! Routes mounted at `/api/assessment`.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_current_assessment, get_questions, submit_assessment, AssessmentHandlers};

/// - `GET /questions` - Active questions in display order
/// - `POST /` - Submit a complete answer set
/// - `GET /current` - Latest result for the member
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/questions", get(get_questions))
        .route("/current", get(get_current_assessment))
        .with_state(handlers)
}
