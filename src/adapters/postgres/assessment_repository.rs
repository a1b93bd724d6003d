//! PostgreSQL implementation of AssessmentRepository.
//!
//! The answer set is stored verbatim as JSONB in `assessment_data`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{column, db_error, parse_user_id_as_uuid, user_id_from_uuid};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::prakriti::{AnswerSet, Assessment, DominantDosha, DoshaScores};
use crate::ports::AssessmentRepository;

#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let scores = assessment.scores();
        sqlx::query(
            r#"
            INSERT INTO prakriti_assessments (
                id, user_id, vata_score, pitta_score, kapha_score,
                dominant_dosha, assessment_data, assessed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(parse_user_id_as_uuid(assessment.user_id())?)
        .bind(scores.vata as i32)
        .bind(scores.pitta as i32)
        .bind(scores.kapha as i32)
        .bind(assessment.dominant().as_str())
        .bind(Json(assessment.answers()))
        .bind(assessment.assessed_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert assessment", e))?;

        Ok(())
    }

    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Assessment>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, vata_score, pitta_score, kapha_score,
                   dominant_dosha, assessment_data, assessed_at
            FROM prakriti_assessments
            WHERE user_id = $1
            ORDER BY assessed_at DESC
            LIMIT 1
            "#,
        )
        .bind(parse_user_id_as_uuid(user_id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch assessment", e))?;

        row.as_ref().map(row_to_assessment).transpose()
    }

    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM prakriti_assessments WHERE user_id = $1)",
        )
        .bind(parse_user_id_as_uuid(user_id)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check assessment existence", e))?;

        Ok(result.0)
    }
}

fn score(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let value: i32 = column(row, name)?;
    u32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative {}: {}", name, value),
        )
    })
}

fn row_to_assessment(row: &PgRow) -> Result<Assessment, DomainError> {
    let dominant: String = column(row, "dominant_dosha")?;
    let dominant: DominantDosha = dominant.parse().map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid dominant_dosha: {}", e))
    })?;
    let Json(answers): Json<AnswerSet> = column(row, "assessment_data")?;
    let assessed_at: chrono::DateTime<chrono::Utc> = column(row, "assessed_at")?;

    Ok(Assessment::reconstitute(
        AssessmentId::from_uuid(column(row, "id")?),
        user_id_from_uuid(column(row, "user_id")?)?,
        DoshaScores::new(
            score(row, "vata_score")?,
            score(row, "pitta_score")?,
            score(row, "kapha_score")?,
        ),
        dominant,
        answers,
        Timestamp::from_datetime(assessed_at),
    ))
}
