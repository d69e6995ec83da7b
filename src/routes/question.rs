use axum::{extract::State, response::IntoResponse};

use crate::{
    dto::question_dto::{
        BatchCreatePayload, BatchCreateResult, CreateQuestionPayload, DeleteQuestionsPayload,
        DeleteQuestionsResult, ListQuestionsQuery, UpdateQuestionPayload,
    },
    dto::response::{ApiResponse, PageInfo},
    error::Result,
    models::question::{NewQuestion, Question},
    services::question_service::QuestionFilter,
    utils::extract::{ApiJson, ApiPath, ApiQuery},
    AppState,
};
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/questions",
    params(ListQuestionsQuery),
    responses(
        (status = 200, description = "One page of questions, newest first", body = [Question]),
        (status = 400, description = "Invalid page, pageSize or type")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuestionsQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let filter = QuestionFilter {
        question_type: query.type_filter()?,
        keyword: query.keyword(),
    };
    let result = state
        .question_service
        .list(filter, query.page(), query.page_size())
        .await?;

    let page = PageInfo {
        total: result.total,
        page: result.page,
        page_size: result.page_size,
    };
    Ok(ApiResponse::ok(result.items).with_page(page))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = Question),
        (status = 400, description = "Missing or invalid fields")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.create(payload).await?;
    Ok(ApiResponse::ok(question).with_message("Question created"))
}

#[utoipa::path(
    post,
    path = "/api/questions/batch",
    request_body = BatchCreatePayload,
    responses(
        (status = 200, description = "Questions created", body = BatchCreateResult),
        (status = 400, description = "Malformed question list or text containing NUL")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn batch_create_questions(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BatchCreatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let questions: Vec<NewQuestion> = payload.questions.into_iter().map(Into::into).collect();
    let count = state.question_service.batch_create(questions).await?;
    Ok(ApiResponse::ok(BatchCreateResult { count }).with_message("Questions created"))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated", body = Question),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.update(id, payload).await?;
    Ok(ApiResponse::ok(question))
}

#[utoipa::path(
    post,
    path = "/api/questions/delete",
    request_body = DeleteQuestionsPayload,
    responses(
        (status = 200, description = "Number of deleted questions", body = DeleteQuestionsResult),
        (status = 400, description = "Malformed id list")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn delete_questions(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DeleteQuestionsPayload>,
) -> Result<impl IntoResponse> {
    let ids = payload.into_ids()?;
    let count = state.question_service.delete(ids).await?;
    Ok(ApiResponse::ok(DeleteQuestionsResult { count }))
}
