//! In-memory question and recommendation tables.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::prakriti::{sort_questions, Question};
use crate::domain::recommendation::{DietRecommendation, ScheduleTemplate};
use crate::ports::{QuestionReader, RecommendationReader};

/// Question table held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionReader {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionReader {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    pub async fn replace(&self, questions: Vec<Question>) {
        *self.questions.write().await = questions;
    }
}

#[async_trait]
impl QuestionReader for InMemoryQuestionReader {
    async fn list_active(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions = self.questions.read().await.clone();
        sort_questions(&mut questions);
        Ok(questions)
    }
}

/// Diet and schedule tables held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecommendationReader {
    diet: Arc<RwLock<Vec<DietRecommendation>>>,
    schedule: Arc<RwLock<Vec<ScheduleTemplate>>>,
}

impl InMemoryRecommendationReader {
    pub fn new(diet: Vec<DietRecommendation>, schedule: Vec<ScheduleTemplate>) -> Self {
        Self {
            diet: Arc::new(RwLock::new(diet)),
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }
}

#[async_trait]
impl RecommendationReader for InMemoryRecommendationReader {
    async fn diet_for(&self, key: &str) -> Result<Vec<DietRecommendation>, DomainError> {
        Ok(self
            .diet
            .read()
            .await
            .iter()
            .filter(|row| row.dosha.display_name() == key)
            .cloned()
            .collect())
    }

    async fn schedule_for(&self, key: &str) -> Result<Vec<ScheduleTemplate>, DomainError> {
        Ok(self
            .schedule
            .read()
            .await
            .iter()
            .filter(|row| row.dosha.display_name() == key)
            .cloned()
            .collect())
    }
}
