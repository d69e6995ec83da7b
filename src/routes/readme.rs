use axum::{extract::State, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{dto::response::ApiResponse, error::Result, AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadmeContent {
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/readme",
    responses(
        (status = 200, description = "Raw Markdown of the study notes", body = ReadmeContent),
        (status = 500, description = "Notes file missing or unreadable")
    ),
    tag = "notes"
)]
#[axum::debug_handler]
pub async fn get_readme(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let content = state.document_service.read_notes().await?;
    Ok(ApiResponse::ok(ReadmeContent { content }))
}
