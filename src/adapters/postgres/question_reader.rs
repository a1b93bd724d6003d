//! PostgreSQL implementation of QuestionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::prakriti::Question;
use crate::ports::QuestionReader;

#[derive(Clone)]
pub struct PostgresQuestionReader {
    pool: PgPool,
}

impl PostgresQuestionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionReader for PostgresQuestionReader {
    async fn list_active(&self) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, category, question, vata_option, pitta_option, kapha_option, display_order
            FROM prakriti_questions
            ORDER BY display_order ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch questions", e))?;

        rows.iter()
            .map(|row| {
                Ok(Question {
                    id: QuestionId::from_uuid(column(row, "id")?),
                    category: column(row, "category")?,
                    prompt: column(row, "question")?,
                    vata_option: column(row, "vata_option")?,
                    pitta_option: column(row, "pitta_option")?,
                    kapha_option: column(row, "kapha_option")?,
                    display_order: column(row, "display_order")?,
                })
            })
            .collect()
    }
}
