use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::question::{Language, QuestionType};
use crate::utils::validation::error_with_message;

/// Body of `POST /api/ai/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_generate_request"))]
pub struct GenerateQuestionsPayload {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: u32,
    /// Only meaningful for programming questions.
    #[serde(default)]
    pub language: Option<Language>,
}

fn validate_generate_request(payload: &GenerateQuestionsPayload) -> Result<(), ValidationError> {
    if payload.question_type == QuestionType::Programming && payload.language.is_none() {
        return Err(error_with_message(
            "language_required",
            "A language is required to generate programming questions",
        ));
    }
    Ok(())
}

impl Default for GenerateQuestionsPayload {
    fn default() -> Self {
        Self {
            question_type: QuestionType::Single,
            count: 3,
            language: Some(Language::Go),
        }
    }
}
