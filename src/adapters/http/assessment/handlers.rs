//! HTTP handlers for the Prakriti assessment.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetCurrentAssessmentHandler, GetCurrentAssessmentQuery, GetQuestionsHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};

use super::dto::{AssessmentResponse, QuestionResponse, SubmitAssessmentRequest};

#[derive(Clone)]
pub struct AssessmentHandlers {
    get_questions: Arc<GetQuestionsHandler>,
    submit: Arc<SubmitAssessmentHandler>,
    get_current: Arc<GetCurrentAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        get_questions: Arc<GetQuestionsHandler>,
        submit: Arc<SubmitAssessmentHandler>,
        get_current: Arc<GetCurrentAssessmentHandler>,
    ) -> Self {
        Self {
            get_questions,
            submit,
            get_current,
        }
    }
}

/// GET /api/assessment/questions
pub async fn get_questions(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = handlers.get_questions.handle().await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

/// POST /api/assessment
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let cmd = SubmitAssessmentCommand {
        user_id: user.id,
        answers: req.answers.into_iter().collect(),
    };
    let assessment = handlers.submit.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(assessment.into())))
}

/// GET /api/assessment/current
pub async fn get_current_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let query = GetCurrentAssessmentQuery { user_id: user.id };
    let assessment = handlers.get_current.handle(query).await?;
    Ok(Json(assessment.into()))
}
