pub mod docs;
pub mod generate;
pub mod health;
pub mod question;
pub mod readme;

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{middleware::cors::api_cors, AppState};

const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Routes under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/readme", get(readme::get_readme))
        .route(
            "/api/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/api/questions/batch", post(question::batch_create_questions))
        .route("/api/questions/delete", post(question::delete_questions))
        .route("/api/questions/:id", put(question::update_question))
        .route("/api/ai/generate", post(generate::generate_questions))
        .route("/api/openapi.json", get(docs::openapi_json))
}

/// The complete application. When `static_dir` is given, unknown paths are
/// served from it with `index.html` as the single-page-app fallback.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health))
        .merge(api_router());

    if let Some(dir) = static_dir {
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router.with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(api_cors())
            .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
    )
}
