use library_checkout::{
    adapters::{email::EmailNotificationService, memory::DatabaseStore},
    api::{handlers::AppState, router::create_router},
    application::library::LibraryService,
    config::AppConfig,
    ports::DataStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_checkout=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    // Initialize adapters
    let store: Arc<dyn DataStore> = if config.seed_sample_data {
        Arc::new(DatabaseStore::new())
    } else {
        Arc::new(DatabaseStore::empty())
    };

    let library = if config.notifications {
        LibraryService::with_notifications(store, Arc::new(EmailNotificationService::new()))
    } else {
        LibraryService::new(store)
    };

    // Create application state
    let app_state = Arc::new(AppState { library });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
