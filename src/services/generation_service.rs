use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::generate_dto::GenerateQuestionsPayload;
use crate::dto::question_dto::BatchQuestionItem;
use crate::error::{Error, Result};
use crate::models::question::{Difficulty, Language, QuestionType};

/// A question produced by the generator. Nothing is persisted until the
/// caller sends a chosen subset to the batch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: String,
    pub difficulty: Difficulty,
    pub language: Option<Language>,
}

impl From<GeneratedQuestion> for BatchQuestionItem {
    fn from(question: GeneratedQuestion) -> Self {
        Self {
            title: question.title,
            question_type: question.question_type,
            option_a: question.option_a,
            option_b: question.option_b,
            option_c: question.option_c,
            option_d: question.option_d,
            answer: Some(question.answer),
            difficulty: question.difficulty,
            language: question.language,
        }
    }
}

fn code_sample(language: Language) -> String {
    let body = match language {
        Language::Go => "// go code sample\nfmt.Println(\"Hello World\")",
        Language::Javascript => "// javascript code sample\nconsole.log(\"Hello World\");",
        Language::Python => "# python code sample\nprint(\"Hello World\")",
        Language::Java => "// java code sample\nSystem.out.println(\"Hello World\");",
    };
    body.to_string()
}

/// Stand-in for a model-backed question generator. Output has a fixed
/// shape; only the difficulty is random.
#[derive(Clone)]
pub struct GenerationService {
    max_count: u32,
}

impl GenerationService {
    pub fn new(max_count: u32) -> Self {
        Self { max_count }
    }

    pub fn generate(&self, request: &GenerateQuestionsPayload) -> Result<Vec<GeneratedQuestion>> {
        self.generate_with(request, &mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &GenerateQuestionsPayload,
        rng: &mut R,
    ) -> Result<Vec<GeneratedQuestion>> {
        request.validate()?;
        if request.count > self.max_count {
            return Err(Error::BadRequest(format!(
                "count must be at most {}",
                self.max_count
            )));
        }

        let questions: Vec<GeneratedQuestion> = (1..=request.count)
            .map(|index| {
                let difficulty = Difficulty::ALL[rng.gen_range(0..Difficulty::ALL.len())];
                build_question(request, index, difficulty)
            })
            .collect();

        tracing::info!(
            question_type = %request.question_type,
            count = questions.len(),
            "generated placeholder questions"
        );
        Ok(questions)
    }
}

fn build_question(request: &GenerateQuestionsPayload, index: u32, difficulty: Difficulty) -> GeneratedQuestion {
    let id = Uuid::new_v4();
    match (request.question_type, request.language) {
        (QuestionType::Programming, Some(language)) => GeneratedQuestion {
            id,
            title: format!("Sample {} programming question {}", language, index),
            question_type: QuestionType::Programming,
            option_a: None,
            option_b: None,
            option_c: None,
            option_d: None,
            answer: code_sample(language),
            difficulty,
            language: Some(language),
        },
        (question_type, _) => {
            let (label, answer) = match question_type {
                QuestionType::Multiple => ("multiple-choice", "A,B"),
                _ => ("single-choice", "A"),
            };
            GeneratedQuestion {
                id,
                title: format!("Sample {} question {}", label, index),
                question_type,
                option_a: Some("Option A content".to_string()),
                option_b: Some("Option B content".to_string()),
                option_c: Some("Option C content".to_string()),
                option_d: Some("Option D content".to_string()),
                answer: answer.to_string(),
                difficulty,
                language: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn request(question_type: QuestionType, count: u32, language: Option<Language>) -> GenerateQuestionsPayload {
        GenerateQuestionsPayload {
            question_type,
            count,
            language,
        }
    }

    #[test]
    fn single_choice_questions_have_fixed_shape() {
        let service = GenerationService::new(10);
        let questions = service
            .generate_with(&request(QuestionType::Single, 3, Some(Language::Go)), &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(questions.len(), 3);
        for (idx, q) in questions.iter().enumerate() {
            assert_eq!(q.title, format!("Sample single-choice question {}", idx + 1));
            assert_eq!(q.answer, "A");
            assert_eq!(q.option_a.as_deref(), Some("Option A content"));
            assert_eq!(q.language, None);
        }
    }

    #[test]
    fn multiple_choice_answer_is_a_and_b() {
        let service = GenerationService::new(10);
        let questions = service
            .generate_with(&request(QuestionType::Multiple, 2, None), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(questions.iter().all(|q| q.answer == "A,B"));
    }

    #[test]
    fn programming_questions_carry_language_and_snippet() {
        let service = GenerationService::new(10);
        let questions = service
            .generate_with(
                &request(QuestionType::Programming, 2, Some(Language::Python)),
                &mut StdRng::seed_from_u64(3),
            )
            .unwrap();

        for q in &questions {
            assert_eq!(q.language, Some(Language::Python));
            assert!(q.option_a.is_none() && q.option_d.is_none());
            assert!(q.answer.contains("print(\"Hello World\")"));
            assert!(q.title.starts_with("Sample python programming question"));
        }
    }

    #[test]
    fn ids_are_unique() {
        let service = GenerationService::new(10);
        let questions = service
            .generate(&request(QuestionType::Single, 10, None))
            .unwrap();
        let ids: HashSet<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn difficulty_covers_every_variant_over_many_draws() {
        let service = GenerationService::new(100);
        let questions = service
            .generate_with(&request(QuestionType::Single, 100, None), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let seen: HashSet<_> = questions.iter().map(|q| q.difficulty).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn count_is_capped() {
        let service = GenerationService::new(10);
        let err = service
            .generate(&request(QuestionType::Single, 11, None))
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn converts_into_batch_item() {
        let service = GenerationService::new(10);
        let question = service
            .generate(&request(QuestionType::Multiple, 1, None))
            .unwrap()
            .remove(0);
        let item = BatchQuestionItem::from(question.clone());
        assert_eq!(item.title, question.title);
        assert_eq!(item.answer.as_deref(), Some("A,B"));
        assert_eq!(item.difficulty, question.difficulty);
    }
}
