//! GetQuestionsHandler - Query handler for the active question set.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::prakriti::Question;
use crate::ports::QuestionReader;

pub struct GetQuestionsHandler {
    reader: Arc<dyn QuestionReader>,
}

impl GetQuestionsHandler {
    pub fn new(reader: Arc<dyn QuestionReader>) -> Self {
        Self { reader }
    }

    /// Questions in display order.
    pub async fn handle(&self) -> Result<Vec<Question>, DomainError> {
        self.reader.list_active().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryQuestionReader;
    use crate::domain::foundation::QuestionId;

    fn question(order: i32) -> Question {
        Question {
            id: QuestionId::new(),
            category: "Physical".to_string(),
            prompt: format!("Question {}", order),
            vata_option: "Thin".to_string(),
            pitta_option: "Medium".to_string(),
            kapha_option: "Broad".to_string(),
            display_order: order,
        }
    }

    #[tokio::test]
    async fn returns_questions_in_display_order() {
        let reader = InMemoryQuestionReader::new(vec![question(3), question(1), question(2)]);
        let handler = GetQuestionsHandler::new(Arc::new(reader));

        let orders: Vec<i32> = handler
            .handle()
            .await
            .unwrap()
            .iter()
            .map(|q| q.display_order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
