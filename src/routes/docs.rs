use axum::Json;
use utoipa::OpenApi;

use crate::dto::generate_dto::GenerateQuestionsPayload;
use crate::dto::question_dto::{
    BatchCreatePayload, BatchCreateResult, BatchQuestionItem, CreateQuestionPayload,
    DeleteQuestionsPayload, DeleteQuestionsResult, UpdateQuestionPayload,
};
use crate::models::question::{Difficulty, Language, Question, QuestionType};
use crate::routes::readme::ReadmeContent;
use crate::services::generation_service::GeneratedQuestion;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::readme::get_readme,
        crate::routes::question::list_questions,
        crate::routes::question::create_question,
        crate::routes::question::batch_create_questions,
        crate::routes::question::update_question,
        crate::routes::question::delete_questions,
        crate::routes::generate::generate_questions,
    ),
    components(schemas(
        Question,
        QuestionType,
        Difficulty,
        Language,
        CreateQuestionPayload,
        UpdateQuestionPayload,
        BatchQuestionItem,
        BatchCreatePayload,
        BatchCreateResult,
        DeleteQuestionsPayload,
        DeleteQuestionsResult,
        GenerateQuestionsPayload,
        GeneratedQuestion,
        ReadmeContent,
    )),
    tags(
        (name = "questions", description = "Question bank management"),
        (name = "generation", description = "Placeholder question generation"),
        (name = "notes", description = "Study notes document"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
