//! HTTP handlers for the member's own profile.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetProfileHandler, GetProfileQuery, UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::profile::ProfileUpdate;

use super::dto::ProfileResponse;

#[derive(Clone)]
pub struct ProfileHandlers {
    get: Arc<GetProfileHandler>,
    update: Arc<UpdateProfileHandler>,
}

impl ProfileHandlers {
    pub fn new(get: Arc<GetProfileHandler>, update: Arc<UpdateProfileHandler>) -> Self {
        Self { get, update }
    }
}

/// GET /api/profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = handlers
        .get
        .handle(GetProfileQuery { user_id: user.id })
        .await?;
    Ok(Json((&profile).into()))
}

/// PUT /api/profile
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        update,
    };
    let profile = handlers.update.handle(cmd).await?;
    Ok(Json((&profile).into()))
}
