//! HTTP handlers for a member's own follow-ups.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CompleteFollowUpCommand, CompleteFollowUpHandler, ListFollowUpsHandler, ListFollowUpsQuery,
};
use crate::domain::foundation::FollowUpId;

use super::dto::{FollowUpOverviewResponse, FollowUpResponse};

#[derive(Clone)]
pub struct FollowUpHandlers {
    list: Arc<ListFollowUpsHandler>,
    complete: Arc<CompleteFollowUpHandler>,
}

impl FollowUpHandlers {
    pub fn new(list: Arc<ListFollowUpsHandler>, complete: Arc<CompleteFollowUpHandler>) -> Self {
        Self { list, complete }
    }
}

pub(crate) fn parse_follow_up_id(raw: &str) -> Result<FollowUpId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid follow-up id: {}", raw)))
}

/// GET /api/follow-ups
pub async fn list_follow_ups(
    State(handlers): State<FollowUpHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<FollowUpOverviewResponse>, ApiError> {
    let overview = handlers
        .list
        .handle(ListFollowUpsQuery { user_id: user.id })
        .await?;
    Ok(Json(overview.into()))
}

/// POST /api/follow-ups/:id/complete
pub async fn complete_follow_up(
    State(handlers): State<FollowUpHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<FollowUpResponse>, ApiError> {
    let cmd = CompleteFollowUpCommand {
        follow_up_id: parse_follow_up_id(&id)?,
        user_id: user.id,
    };
    let follow_up = handlers.complete.handle(cmd).await?;
    Ok(Json((&follow_up).into()))
}
