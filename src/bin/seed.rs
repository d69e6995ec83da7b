//! Clears the question table and inserts the sample questions.

use homework_bank::{
    config::{get_config, init_config},
    database::{create_pool, run_migrations},
    services::question_service::QuestionService,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;

    let inserted = QuestionService::new(pool, None).seed().await?;
    info!(inserted, "Database initialized");

    Ok(())
}
