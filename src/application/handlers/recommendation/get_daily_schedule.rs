//! GetDailyScheduleHandler - the member's daily routine grouped by time of day.

use std::sync::Arc;

use serde::Serialize;

use super::{RecommendationSelection, SelectRecommendationsHandler};
use crate::domain::foundation::UserId;
use crate::domain::prakriti::DominantDosha;
use crate::domain::recommendation::{
    group_by_time_of_day, RecommendationError, RecommendationTable, ScheduleBlock,
};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct GetDailyScheduleQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    pub dominant_dosha: DominantDosha,
    pub blocks: Vec<ScheduleBlock>,
}

pub struct GetDailyScheduleHandler {
    assessments: Arc<dyn AssessmentRepository>,
    selector: Arc<SelectRecommendationsHandler>,
}

impl GetDailyScheduleHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        selector: Arc<SelectRecommendationsHandler>,
    ) -> Self {
        Self {
            assessments,
            selector,
        }
    }

    pub async fn handle(
        &self,
        query: GetDailyScheduleQuery,
    ) -> Result<DailySchedule, RecommendationError> {
        let assessment = self
            .assessments
            .find_latest_by_user(&query.user_id)
            .await?
            .ok_or(RecommendationError::AssessmentRequired)?;

        let rows = match self
            .selector
            .handle(assessment.dominant(), RecommendationTable::Schedule)
            .await?
        {
            RecommendationSelection::Schedule(rows) => rows,
            RecommendationSelection::Diet(_) => Vec::new(),
        };

        Ok(DailySchedule {
            dominant_dosha: assessment.dominant(),
            blocks: group_by_time_of_day(rows),
        })
    }
}
