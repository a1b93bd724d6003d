//! GetDietChartHandler - the member's diet recommendations.

use std::sync::Arc;

use serde::Serialize;

use super::{RecommendationSelection, SelectRecommendationsHandler};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::prakriti::{DominantDosha, DoshaScores};
use crate::domain::recommendation::{DietRecommendation, RecommendationError, RecommendationTable};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct GetDietChartQuery {
    pub user_id: UserId,
}

/// Diet chart with the assessment it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietChart {
    pub dominant_dosha: DominantDosha,
    pub scores: DoshaScores,
    pub assessed_at: Timestamp,
    pub recommendations: Vec<DietRecommendation>,
}

pub struct GetDietChartHandler {
    assessments: Arc<dyn AssessmentRepository>,
    selector: Arc<SelectRecommendationsHandler>,
}

impl GetDietChartHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        selector: Arc<SelectRecommendationsHandler>,
    ) -> Self {
        Self {
            assessments,
            selector,
        }
    }

    pub async fn handle(&self, query: GetDietChartQuery) -> Result<DietChart, RecommendationError> {
        let assessment = self
            .assessments
            .find_latest_by_user(&query.user_id)
            .await?
            .ok_or(RecommendationError::AssessmentRequired)?;

        let recommendations = match self
            .selector
            .handle(assessment.dominant(), RecommendationTable::Diet)
            .await?
        {
            RecommendationSelection::Diet(rows) => rows,
            RecommendationSelection::Schedule(_) => Vec::new(),
        };

        Ok(DietChart {
            dominant_dosha: assessment.dominant(),
            scores: *assessment.scores(),
            assessed_at: *assessment.assessed_at(),
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentRepository, InMemoryRecommendationReader};
    use crate::domain::foundation::{DietRecommendationId, QuestionId};
    use crate::domain::prakriti::{AnswerSet, Assessment, Dosha};
    use crate::domain::recommendation::MealType;

    fn user() -> UserId {
        UserId::new("member-1").unwrap()
    }

    fn handler(repo: Arc<InMemoryAssessmentRepository>) -> GetDietChartHandler {
        let reader = InMemoryRecommendationReader::new(
            vec![
                DietRecommendation {
                    id: DietRecommendationId::new(),
                    dosha: Dosha::Pitta,
                    meal_type: MealType::Lunch,
                    food_items: vec!["Cucumber".to_string()],
                    foods_to_avoid: vec!["Chilli".to_string()],
                    portion_guidelines: Some("Moderate".to_string()),
                    timing: Some("12:00".to_string()),
                },
                DietRecommendation {
                    id: DietRecommendationId::new(),
                    dosha: Dosha::Pitta,
                    meal_type: MealType::Breakfast,
                    food_items: vec!["Oats".to_string()],
                    foods_to_avoid: vec![],
                    portion_guidelines: None,
                    timing: None,
                },
            ],
            vec![],
        );
        let selector = Arc::new(SelectRecommendationsHandler::new(Arc::new(reader)));
        GetDietChartHandler::new(repo, selector)
    }

    #[tokio::test]
    async fn requires_an_assessment() {
        let handler = handler(Arc::new(InMemoryAssessmentRepository::new()));
        let result = handler.handle(GetDietChartQuery { user_id: user() }).await;
        assert_eq!(result, Err(RecommendationError::AssessmentRequired));
    }

    #[tokio::test]
    async fn returns_ordered_rows_for_current_label() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let answers: AnswerSet = vec![
            (QuestionId::new(), Dosha::Pitta),
            (QuestionId::new(), Dosha::Kapha),
            (QuestionId::new(), Dosha::Pitta),
            (QuestionId::new(), Dosha::Kapha),
        ]
        .into_iter()
        .collect();
        let assessment = Assessment::submit(user(), answers, 4).unwrap();
        repo.save(&assessment).await.unwrap();

        let chart = handler(repo)
            .handle(GetDietChartQuery { user_id: user() })
            .await
            .unwrap();

        assert_eq!(chart.dominant_dosha, DominantDosha::PittaKapha);
        assert_eq!(chart.recommendations.len(), 2);
        assert_eq!(chart.recommendations[0].meal_type, MealType::Breakfast);
    }
}
