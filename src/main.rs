use homework_bank::{
    config::{get_config, init_config, LogFormat},
    database::{create_pool, run_migrations},
    routes, AppState,
};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "homework_bank=debug,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config.log_format);

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;

    let app_state = AppState::new(pool, config);

    let static_dir = Path::new(&config.static_dir);
    let static_dir = if static_dir.is_dir() {
        info!("Serving admin UI from: {}", static_dir.display());
        Some(static_dir)
    } else {
        warn!("Static directory {} not found; serving API only", static_dir.display());
        None
    };
    let app = routes::app(app_state, static_dir);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
