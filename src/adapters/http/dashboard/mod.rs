//! HTTP adapter for the member dashboard, mounted at `/api/dashboard`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{GetDashboardHandler, GetDashboardQuery};
use crate::domain::dashboard::DashboardSummary;

#[derive(Clone)]
pub struct DashboardHandlers {
    get: Arc<GetDashboardHandler>,
}

impl DashboardHandlers {
    pub fn new(get: Arc<GetDashboardHandler>) -> Self {
        Self { get }
    }
}

/// GET /api/dashboard
async fn get_dashboard(
    State(handlers): State<DashboardHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = handlers
        .get
        .handle(GetDashboardQuery { user_id: user.id })
        .await?;
    Ok(Json(summary))
}

pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .with_state(handlers)
}
