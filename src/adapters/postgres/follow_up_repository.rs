//! PostgreSQL implementation of FollowUpRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, parse_user_id_as_uuid, user_id_from_uuid};
use crate::domain::follow_up::{FollowUp, FollowUpType};
use crate::domain::foundation::{DomainError, ErrorCode, FollowUpId, Timestamp, UserId};
use crate::ports::FollowUpRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, follow_up_type, title, description, scheduled_date,
           completed, completed_at, notes, created_by, created_at
    FROM follow_ups
"#;

#[derive(Clone)]
pub struct PostgresFollowUpRepository {
    pool: PgPool,
}

impl PostgresFollowUpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowUpRepository for PostgresFollowUpRepository {
    async fn save(&self, follow_up: &FollowUp) -> Result<(), DomainError> {
        let created_by = follow_up
            .created_by()
            .map(parse_user_id_as_uuid)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO follow_ups (
                id, user_id, follow_up_type, title, description, scheduled_date,
                completed, completed_at, notes, created_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(follow_up.id().as_uuid())
        .bind(parse_user_id_as_uuid(follow_up.user_id())?)
        .bind(follow_up.follow_up_type().as_str())
        .bind(follow_up.title())
        .bind(follow_up.description())
        .bind(follow_up.scheduled_date().as_datetime())
        .bind(follow_up.is_completed())
        .bind(follow_up.completed_at().map(|t| *t.as_datetime()))
        .bind(follow_up.notes())
        .bind(created_by)
        .bind(follow_up.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert follow-up", e))?;

        Ok(())
    }

    async fn update(&self, follow_up: &FollowUp) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE follow_ups SET
                completed = $2,
                completed_at = $3,
                notes = $4
            WHERE id = $1
            "#,
        )
        .bind(follow_up.id().as_uuid())
        .bind(follow_up.is_completed())
        .bind(follow_up.completed_at().map(|t| *t.as_datetime()))
        .bind(follow_up.notes())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update follow-up", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(follow_up.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &FollowUpId) -> Result<Option<FollowUp>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch follow-up", e))?;

        row.as_ref().map(row_to_follow_up).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<FollowUp>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY scheduled_date ASC",
            SELECT_COLUMNS
        ))
        .bind(parse_user_id_as_uuid(user_id)?)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch follow-ups by user", e))?;

        rows.iter().map(row_to_follow_up).collect()
    }

    async fn count_pending(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM follow_ups WHERE user_id = $1 AND completed = false",
        )
        .bind(parse_user_id_as_uuid(user_id)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count pending follow-ups", e))?;

        Ok(result.0.max(0) as u64)
    }

    async fn delete(&self, id: &FollowUpId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM follow_ups WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete follow-up", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn not_found(id: &FollowUpId) -> DomainError {
    DomainError::new(
        ErrorCode::FollowUpNotFound,
        format!("Follow-up not found: {}", id),
    )
}

fn row_to_follow_up(row: &PgRow) -> Result<FollowUp, DomainError> {
    let type_str: String = column(row, "follow_up_type")?;
    let follow_up_type: FollowUpType = type_str.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid follow_up_type: {}", type_str),
        )
    })?;
    let scheduled_date: chrono::DateTime<chrono::Utc> = column(row, "scheduled_date")?;
    let completed_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "completed_at")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let created_by: Option<uuid::Uuid> = column(row, "created_by")?;

    Ok(FollowUp::reconstitute(
        FollowUpId::from_uuid(column(row, "id")?),
        user_id_from_uuid(column(row, "user_id")?)?,
        follow_up_type,
        column(row, "title")?,
        column(row, "description")?,
        Timestamp::from_datetime(scheduled_date),
        column(row, "completed")?,
        completed_at.map(Timestamp::from_datetime),
        column(row, "notes")?,
        created_by.map(user_id_from_uuid).transpose()?,
        Timestamp::from_datetime(created_at),
    ))
}
