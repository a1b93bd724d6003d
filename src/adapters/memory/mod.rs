//! In-memory adapters.
//!
//! Implement every storage port over `tokio::sync::RwLock` maps.
//! Back the handler unit tests and the end-to-end router tests.

mod member_data;
mod reference_data;

pub use member_data::{
    InMemoryAssessmentRepository, InMemoryFollowUpRepository, InMemoryProfileRepository,
    InMemoryProgressRepository,
};
pub use reference_data::{InMemoryQuestionReader, InMemoryRecommendationReader};
