use axum::{extract::State, response::IntoResponse};

use crate::{
    dto::generate_dto::GenerateQuestionsPayload,
    dto::response::ApiResponse,
    error::Result,
    services::generation_service::GeneratedQuestion,
    utils::extract::ApiJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/ai/generate",
    request_body = GenerateQuestionsPayload,
    responses(
        (status = 200, description = "Generated questions, not yet saved", body = [GeneratedQuestion]),
        (status = 400, description = "Invalid type, count or language")
    ),
    tag = "generation"
)]
#[axum::debug_handler]
pub async fn generate_questions(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<GenerateQuestionsPayload>,
) -> Result<impl IntoResponse> {
    let questions = state.generation_service.generate(&payload)?;
    Ok(ApiResponse::ok(questions).with_message("Questions generated"))
}
