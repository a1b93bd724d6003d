//! PostgreSQL implementation of ProgressRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, parse_user_id_as_uuid, user_id_from_uuid};
use crate::domain::foundation::{
    DomainError, ProgressEntryId, Timestamp, UserId, WellnessRating,
};
use crate::domain::progress::ProgressEntry;
use crate::ports::ProgressRepository;

#[derive(Clone)]
pub struct PostgresProgressRepository {
    pool: PgPool,
}

impl PostgresProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepository for PostgresProgressRepository {
    async fn save(&self, entry: &ProgressEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO progress_tracking (
                id, user_id, tracking_date, weight, energy_level,
                sleep_quality, stress_level, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(parse_user_id_as_uuid(entry.user_id())?)
        .bind(entry.tracking_date())
        .bind(entry.weight())
        .bind(i16::from(entry.energy_level()))
        .bind(i16::from(entry.sleep_quality()))
        .bind(i16::from(entry.stress_level()))
        .bind(entry.notes())
        .bind(entry.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert progress entry", e))?;

        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, tracking_date, weight, energy_level,
                   sleep_quality, stress_level, notes, created_at
            FROM progress_tracking
            WHERE user_id = $1
            ORDER BY tracking_date DESC, created_at DESC
            LIMIT $2
            "#,
        )
        .bind(parse_user_id_as_uuid(user_id)?)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch progress entries", e))?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn rating(row: &PgRow, name: &str) -> Result<WellnessRating, DomainError> {
    let value: i16 = column(row, name)?;
    Ok(WellnessRating::for_field(name, value)?)
}

fn row_to_entry(row: &PgRow) -> Result<ProgressEntry, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    Ok(ProgressEntry::reconstitute(
        ProgressEntryId::from_uuid(column(row, "id")?),
        user_id_from_uuid(column(row, "user_id")?)?,
        column(row, "tracking_date")?,
        column(row, "weight")?,
        rating(row, "energy_level")?,
        rating(row, "sleep_quality")?,
        rating(row, "stress_level")?,
        column(row, "notes")?,
        Timestamp::from_datetime(created_at),
    ))
}
