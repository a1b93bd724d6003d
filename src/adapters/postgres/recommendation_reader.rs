//! PostgreSQL implementation of RecommendationReader.
//!
//! Rows come back in insertion order (`created_at`, then `id`); the
//! selection handler applies meal and display ordering.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DietRecommendationId, DomainError, ErrorCode, ScheduleTemplateId};
use crate::domain::prakriti::Dosha;
use crate::domain::recommendation::{DietRecommendation, MealType, ScheduleTemplate};
use crate::ports::RecommendationReader;

#[derive(Clone)]
pub struct PostgresRecommendationReader {
    pool: PgPool,
}

impl PostgresRecommendationReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationReader for PostgresRecommendationReader {
    async fn diet_for(&self, key: &str) -> Result<Vec<DietRecommendation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, dosha_type, meal_type, food_items, foods_to_avoid,
                   portion_guidelines, timing
            FROM diet_recommendations
            WHERE dosha_type = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch diet recommendations", e))?;

        rows.iter().map(row_to_diet).collect()
    }

    async fn schedule_for(&self, key: &str) -> Result<Vec<ScheduleTemplate>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, dosha_type, time_of_day, activity, duration_minutes,
                   description, benefits, display_order
            FROM daily_schedule_templates
            WHERE dosha_type = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch schedule templates", e))?;

        rows.iter().map(row_to_schedule).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn parse_dosha(row: &PgRow) -> Result<Dosha, DomainError> {
    let raw: String = column(row, "dosha_type")?;
    raw.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid dosha_type: {}", raw),
        )
    })
}

fn row_to_diet(row: &PgRow) -> Result<DietRecommendation, DomainError> {
    let meal_type: String = column(row, "meal_type")?;
    Ok(DietRecommendation {
        id: DietRecommendationId::from_uuid(column(row, "id")?),
        dosha: parse_dosha(row)?,
        meal_type: MealType::parse(&meal_type),
        food_items: column(row, "food_items")?,
        foods_to_avoid: column(row, "foods_to_avoid")?,
        portion_guidelines: column(row, "portion_guidelines")?,
        timing: column(row, "timing")?,
    })
}

fn row_to_schedule(row: &PgRow) -> Result<ScheduleTemplate, DomainError> {
    let duration: Option<i32> = column(row, "duration_minutes")?;
    Ok(ScheduleTemplate {
        id: ScheduleTemplateId::from_uuid(column(row, "id")?),
        dosha: parse_dosha(row)?,
        time_of_day: column(row, "time_of_day")?,
        activity: column(row, "activity")?,
        duration_minutes: duration.and_then(|d| u32::try_from(d).ok()),
        description: column(row, "description")?,
        benefits: column(row, "benefits")?,
        display_order: column(row, "display_order")?,
    })
}
