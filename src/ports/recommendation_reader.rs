//! Recommendation reader port.
//!
//! Both tables are keyed by dosha name as stored (`Vata`, `Pitta`, `Kapha`).
//! A key that matches no row yields an empty list, never an error.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::recommendation::{DietRecommendation, ScheduleTemplate};

#[async_trait]
pub trait RecommendationReader: Send + Sync {
    /// Diet rows whose dosha equals `key`, in storage order.
    async fn diet_for(&self, key: &str) -> Result<Vec<DietRecommendation>, DomainError>;

    /// Schedule rows whose dosha equals `key`, in storage order.
    async fn schedule_for(&self, key: &str) -> Result<Vec<ScheduleTemplate>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn recommendation_reader_accepts_dyn(_reader: &dyn RecommendationReader) {}

    #[test]
    fn recommendation_reader_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RecommendationReader>();
    }
}
