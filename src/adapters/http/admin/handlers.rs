//! HTTP handlers for administrator endpoints.
//!
//! The admin flag is checked by the application handlers, so a member
//! without it gets 403 from every route here.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::follow_up::{parse_follow_up_id, CreateFollowUpRequest, FollowUpResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::profile::MemberSummaryResponse;
use crate::application::handlers::{
    CreateFollowUpCommand, CreateFollowUpHandler, DeleteFollowUpCommand, DeleteFollowUpHandler,
    ListMembersHandler, ListMembersQuery, ListUserFollowUpsHandler, ListUserFollowUpsQuery,
};
use crate::domain::foundation::UserId;

#[derive(Clone)]
pub struct AdminHandlers {
    list_members: Arc<ListMembersHandler>,
    list_follow_ups: Arc<ListUserFollowUpsHandler>,
    create_follow_up: Arc<CreateFollowUpHandler>,
    delete_follow_up: Arc<DeleteFollowUpHandler>,
}

impl AdminHandlers {
    pub fn new(
        list_members: Arc<ListMembersHandler>,
        list_follow_ups: Arc<ListUserFollowUpsHandler>,
        create_follow_up: Arc<CreateFollowUpHandler>,
        delete_follow_up: Arc<DeleteFollowUpHandler>,
    ) -> Self {
        Self {
            list_members,
            list_follow_ups,
            create_follow_up,
            delete_follow_up,
        }
    }
}

fn parse_member_id(raw: String) -> Result<UserId, ApiError> {
    UserId::new(raw).map_err(|e| ApiError::bad_request(e.to_string()))
}

/// GET /api/admin/members
pub async fn list_members(
    State(handlers): State<AdminHandlers>,
    RequireAuth(admin): RequireAuth,
) -> Result<Json<Vec<MemberSummaryResponse>>, ApiError> {
    let members = handlers
        .list_members
        .handle(ListMembersQuery { admin_id: admin.id })
        .await?;
    Ok(Json(members.iter().map(Into::into).collect()))
}

/// GET /api/admin/members/:user_id/follow-ups
pub async fn list_member_follow_ups(
    State(handlers): State<AdminHandlers>,
    RequireAuth(admin): RequireAuth,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FollowUpResponse>>, ApiError> {
    let query = ListUserFollowUpsQuery {
        admin_id: admin.id,
        user_id: parse_member_id(user_id)?,
    };
    let follow_ups = handlers.list_follow_ups.handle(query).await?;
    Ok(Json(follow_ups.iter().map(Into::into).collect()))
}

/// POST /api/admin/members/:user_id/follow-ups
pub async fn create_member_follow_up(
    State(handlers): State<AdminHandlers>,
    RequireAuth(admin): RequireAuth,
    Path(user_id): Path<String>,
    Json(req): Json<CreateFollowUpRequest>,
) -> Result<(StatusCode, Json<FollowUpResponse>), ApiError> {
    let cmd = CreateFollowUpCommand {
        admin_id: admin.id,
        user_id: parse_member_id(user_id)?,
        follow_up_type: req.follow_up_type,
        title: req.title,
        description: req.description,
        scheduled_date: req.scheduled_date,
    };
    let follow_up = handlers.create_follow_up.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json((&follow_up).into())))
}

/// DELETE /api/admin/follow-ups/:id
pub async fn delete_follow_up(
    State(handlers): State<AdminHandlers>,
    RequireAuth(admin): RequireAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let cmd = DeleteFollowUpCommand {
        admin_id: admin.id,
        follow_up_id: parse_follow_up_id(&id)?,
    };
    handlers.delete_follow_up.handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
