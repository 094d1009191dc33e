use kanvas_api::{build_router, state::AppState};
use kanvas_config::Settings;
use kanvas_db::resolve_store;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "kanvas_api=debug,kanvas_services=debug,kanvas_db=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let settings = Settings::load()?;
    info!("Starting Kingdom Kanvas API on {}:{}", settings.app.host, settings.app.port);

    // Resolve the store once; a failure leaves the process in degraded mode
    let store = resolve_store(&settings.database).await;
    info!(connected = store.is_connected(), "Store resolved");

    let app_state = AppState::new(store, settings.clone());

    // Build router
    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
