//! HTTP handlers for diet charts and daily schedules.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    DailySchedule, DietChart, GetDailyScheduleHandler, GetDailyScheduleQuery,
    GetDietChartHandler, GetDietChartQuery, RecommendationSelection,
    SelectRecommendationsHandler,
};
use crate::domain::recommendation::RecommendationTable;

#[derive(Clone)]
pub struct RecommendationHandlers {
    diet_chart: Arc<GetDietChartHandler>,
    daily_schedule: Arc<GetDailyScheduleHandler>,
    selector: Arc<SelectRecommendationsHandler>,
}

impl RecommendationHandlers {
    pub fn new(
        diet_chart: Arc<GetDietChartHandler>,
        daily_schedule: Arc<GetDailyScheduleHandler>,
        selector: Arc<SelectRecommendationsHandler>,
    ) -> Self {
        Self {
            diet_chart,
            daily_schedule,
            selector,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Dominant label as displayed, e.g. `Vata-Pitta`.
    pub label: String,
}

/// GET /api/recommendations/diet
pub async fn get_diet_chart(
    State(handlers): State<RecommendationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DietChart>, ApiError> {
    let chart = handlers
        .diet_chart
        .handle(GetDietChartQuery { user_id: user.id })
        .await?;
    Ok(Json(chart))
}

/// GET /api/recommendations/schedule
pub async fn get_daily_schedule(
    State(handlers): State<RecommendationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DailySchedule>, ApiError> {
    let schedule = handlers
        .daily_schedule
        .handle(GetDailyScheduleQuery { user_id: user.id })
        .await?;
    Ok(Json(schedule))
}

/// GET /api/recommendations/lookup/:table?label=...
pub async fn lookup_recommendations(
    State(handlers): State<RecommendationHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(table): Path<RecommendationTable>,
    Query(params): Query<LookupParams>,
) -> Result<Json<RecommendationSelection>, ApiError> {
    let label = params.label.trim();
    if label.is_empty() {
        return Err(ApiError::bad_request("label must not be empty"));
    }
    let selection = handlers.selector.select_by_label(label, table).await?;
    Ok(Json(selection))
}
