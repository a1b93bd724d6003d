//! Recommendation domain - curated diet and daily-schedule guidance.
//!
//! Reference rows are global and read-only. They are selected by the
//! first component of a user's dominant label and returned in each
//! table's intrinsic order.

mod diet;
mod errors;
mod schedule;
mod selector;

pub use diet::{sort_by_meal_order, DietRecommendation, MealType};
pub use errors::RecommendationError;
pub use schedule::{group_by_time_of_day, sort_by_display_order, ScheduleBlock, ScheduleTemplate};
pub use selector::{recommendation_key, RecommendationTable};
