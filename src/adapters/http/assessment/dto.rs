//! Request and response bodies for assessment endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;
use crate::domain::prakriti::{Assessment, AnswerSet, DominantDosha, Dosha, DoshaScores, Question};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOptionResponse {
    pub dosha: Dosha,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionResponse {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub options: Vec<QuestionOptionResponse>,
    pub display_order: i32,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        let options = question
            .options()
            .into_iter()
            .map(|(dosha, text)| QuestionOptionResponse {
                dosha,
                text: text.to_string(),
            })
            .collect();
        Self {
            id: question.id.to_string(),
            category: question.category,
            prompt: question.prompt,
            options,
            display_order: question.display_order,
        }
    }
}

/// Body of `POST /api/assessment`: question id to chosen dosha.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: BTreeMap<QuestionId, Dosha>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentResponse {
    pub id: String,
    pub scores: DoshaScores,
    pub dominant_dosha: DominantDosha,
    pub answers: AnswerSet,
    pub assessed_at: String,
}

impl From<Assessment> for AssessmentResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id().to_string(),
            scores: *assessment.scores(),
            dominant_dosha: assessment.dominant(),
            answers: assessment.answers().clone(),
            assessed_at: assessment.assessed_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_deserializes_answer_map() {
        let id = QuestionId::new();
        let json = format!(r#"{{"answers": {{"{}": "pitta"}}}}"#, id);

        let req: SubmitAssessmentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.answers.get(&id), Some(&Dosha::Pitta));
    }

    #[test]
    fn question_response_lists_options_in_dosha_order() {
        let question = Question {
            id: QuestionId::new(),
            category: "Body Frame".to_string(),
            prompt: "How would you describe your build?".to_string(),
            vata_option: "Thin".to_string(),
            pitta_option: "Medium".to_string(),
            kapha_option: "Broad".to_string(),
            display_order: 1,
        };

        let response = QuestionResponse::from(question);
        let doshas: Vec<Dosha> = response.options.iter().map(|o| o.dosha).collect();
        assert_eq!(doshas, vec![Dosha::Vata, Dosha::Pitta, Dosha::Kapha]);
        assert_eq!(response.options[2].text, "Broad");
    }

    #[test]
    fn assessment_response_serializes_label_string() {
        let answers: AnswerSet = vec![(QuestionId::new(), Dosha::Vata)].into_iter().collect();
        let assessment = Assessment::submit(
            crate::domain::foundation::UserId::new("member-1").unwrap(),
            answers,
            1,
        )
        .unwrap();

        let json = serde_json::to_value(AssessmentResponse::from(assessment)).unwrap();
        assert_eq!(json["dominant_dosha"], "Vata");
        assert_eq!(json["scores"]["vata"], 1);
    }
}
