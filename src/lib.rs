pub mod admin;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::{
    document_service::DocumentService, generation_service::GenerationService,
    question_service::QuestionService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub question_service: QuestionService,
    pub generation_service: GenerationService,
    pub document_service: DocumentService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let question_service = QuestionService::new(pool.clone(), config.max_page_size);
        let generation_service = GenerationService::new(config.max_generate_count);
        let document_service = DocumentService::new(&config.readme_path);

        Self {
            pool,
            question_service,
            generation_service,
            document_service,
        }
    }
}
