//! HTTP adapter for diet and schedule recommendations.
//!
//! Routes mounted at `/api/recommendations`:
//! - `GET /diet` - Diet chart for the member's current assessment
//! - `GET /schedule` - Daily routine grouped by time of day
//! - `GET /lookup/:table?label=` - Raw selection for any dominant label

mod handlers;

use axum::{routing::get, Router};

pub use handlers::{LookupParams, RecommendationHandlers};

use handlers::{get_daily_schedule, get_diet_chart, lookup_recommendations};

pub fn recommendation_routes(handlers: RecommendationHandlers) -> Router {
    Router::new()
        .route("/diet", get(get_diet_chart))
        .route("/schedule", get(get_daily_schedule))
        .route("/lookup/:table", get(lookup_recommendations))
        .with_state(handlers)
}
