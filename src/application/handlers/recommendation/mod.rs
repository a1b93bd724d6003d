//! Recommendation query handlers.

mod get_daily_schedule;
mod get_diet_chart;
mod select_recommendations;

pub use get_daily_schedule::{DailySchedule, GetDailyScheduleHandler, GetDailyScheduleQuery};
pub use get_diet_chart::{DietChart, GetDietChartHandler, GetDietChartQuery};
pub use select_recommendations::{RecommendationSelection, SelectRecommendationsHandler};
