//! SelectRecommendationsHandler - picks and orders reference rows for a label.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::prakriti::DominantDosha;
use crate::domain::recommendation::{
    recommendation_key, sort_by_display_order, sort_by_meal_order, DietRecommendation,
    RecommendationTable, ScheduleTemplate,
};
use crate::ports::RecommendationReader;

/// Ordered rows from one reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "table", content = "rows", rename_all = "lowercase")]
pub enum RecommendationSelection {
    Diet(Vec<DietRecommendation>),
    Schedule(Vec<ScheduleTemplate>),
}

impl RecommendationSelection {
    pub fn len(&self) -> usize {
        match self {
            RecommendationSelection::Diet(rows) => rows.len(),
            RecommendationSelection::Schedule(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects the rows for a dominant label.
///
/// Diet rows come back breakfast, snack, lunch, dinner, then anything else;
/// schedule rows by display order. No match is an empty selection.
pub struct SelectRecommendationsHandler {
    reader: Arc<dyn RecommendationReader>,
}

impl SelectRecommendationsHandler {
    pub fn new(reader: Arc<dyn RecommendationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        label: DominantDosha,
        table: RecommendationTable,
    ) -> Result<RecommendationSelection, DomainError> {
        self.select_by_label(label.as_str(), table).await
    }

    /// Same as [`handle`](Self::handle) for a label kept as text.
    pub async fn select_by_label(
        &self,
        label: &str,
        table: RecommendationTable,
    ) -> Result<RecommendationSelection, DomainError> {
        let key = recommendation_key(label);
        let selection = match table {
            RecommendationTable::Diet => {
                let mut rows = self.reader.diet_for(key).await?;
                sort_by_meal_order(&mut rows);
                RecommendationSelection::Diet(rows)
            }
            RecommendationTable::Schedule => {
                let mut rows = self.reader.schedule_for(key).await?;
                sort_by_display_order(&mut rows);
                RecommendationSelection::Schedule(rows)
            }
        };
        debug!(label, key, ?table, rows = selection.len(), "Recommendations selected");
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecommendationReader;
    use crate::domain::foundation::{DietRecommendationId, ScheduleTemplateId};
    use crate::domain::prakriti::Dosha;
    use crate::domain::recommendation::MealType;

    fn diet(dosha: Dosha, meal: &str) -> DietRecommendation {
        DietRecommendation {
            id: DietRecommendationId::new(),
            dosha,
            meal_type: MealType::parse(meal),
            food_items: vec!["Rice".to_string()],
            foods_to_avoid: vec![],
            portion_guidelines: None,
            timing: None,
        }
    }

    fn slot(dosha: Dosha, activity: &str, order: i32) -> ScheduleTemplate {
        ScheduleTemplate {
            id: ScheduleTemplateId::new(),
            dosha,
            time_of_day: "morning".to_string(),
            activity: activity.to_string(),
            duration_minutes: Some(15),
            description: None,
            benefits: None,
            display_order: order,
        }
    }

    fn handler() -> SelectRecommendationsHandler {
        let reader = InMemoryRecommendationReader::new(
            vec![
                diet(Dosha::Vata, "dinner"),
                diet(Dosha::Vata, "brunch"),
                diet(Dosha::Vata, "breakfast"),
                diet(Dosha::Pitta, "lunch"),
                diet(Dosha::Vata, "snack"),
                diet(Dosha::Vata, "lunch"),
            ],
            vec![
                slot(Dosha::Vata, "Walk", 2),
                slot(Dosha::Vata, "Oil massage", 1),
                slot(Dosha::Kapha, "Run", 1),
            ],
        );
        SelectRecommendationsHandler::new(Arc::new(reader))
    }

    fn meal_names(selection: RecommendationSelection) -> Vec<String> {
        match selection {
            RecommendationSelection::Diet(rows) => {
                rows.iter().map(|r| r.meal_type.to_string()).collect()
            }
            other => panic!("expected diet rows, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn composite_label_selects_first_component_in_meal_order() {
        let selection = handler()
            .handle(DominantDosha::VataPitta, RecommendationTable::Diet)
            .await
            .unwrap();

        assert_eq!(
            meal_names(selection),
            vec!["breakfast", "snack", "lunch", "dinner", "brunch"]
        );
    }

    #[tokio::test]
    async fn schedule_rows_follow_display_order() {
        let selection = handler()
            .handle(DominantDosha::Vata, RecommendationTable::Schedule)
            .await
            .unwrap();

        match selection {
            RecommendationSelection::Schedule(rows) => {
                let activities: Vec<_> = rows.iter().map(|r| r.activity.as_str()).collect();
                assert_eq!(activities, vec!["Oil massage", "Walk"]);
            }
            other => panic!("expected schedule rows, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn tri_dosha_selects_nothing() {
        let selection = handler()
            .handle(DominantDosha::TriDosha, RecommendationTable::Diet)
            .await
            .unwrap();
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn unmatched_label_is_empty_not_error() {
        let selection = handler()
            .select_by_label("Kapha", RecommendationTable::Diet)
            .await
            .unwrap();
        assert_eq!(selection, RecommendationSelection::Diet(vec![]));
    }
}
