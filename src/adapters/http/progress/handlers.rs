//! HTTP handlers for daily progress tracking.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    ListProgressHandler, ListProgressQuery, RecordProgressCommand, RecordProgressHandler,
};
use crate::domain::progress::ProgressInput;

use super::dto::ProgressEntryResponse;

#[derive(Clone)]
pub struct ProgressHandlers {
    record: Arc<RecordProgressHandler>,
    list: Arc<ListProgressHandler>,
}

impl ProgressHandlers {
    pub fn new(record: Arc<RecordProgressHandler>, list: Arc<ListProgressHandler>) -> Self {
        Self { record, list }
    }
}

/// POST /api/progress
pub async fn record_progress(
    State(handlers): State<ProgressHandlers>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<ProgressInput>,
) -> Result<(StatusCode, Json<ProgressEntryResponse>), ApiError> {
    let cmd = RecordProgressCommand {
        user_id: user.id,
        input,
    };
    let entry = handlers.record.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json((&entry).into())))
}

/// GET /api/progress
pub async fn list_progress(
    State(handlers): State<ProgressHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<ProgressEntryResponse>>, ApiError> {
    let entries = handlers
        .list
        .handle(ListProgressQuery { user_id: user.id })
        .await?;
    Ok(Json(entries.iter().map(Into::into).collect()))
}
