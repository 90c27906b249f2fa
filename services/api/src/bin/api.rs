//! services/api/src/bin/api.rs

use api_lib::{
    adapters::build_generator,
    config::Config,
    error::ApiError,
    web::{router, state::AppState},
};
use campaign_core::FontSet;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters & the Orchestrator ---
    let fonts = FontSet::load(config.font_path.as_deref());
    info!(
        "Fallback renderer using {} font",
        if fonts.is_scalable() { "a scalable" } else { "the bitmap" }
    );
    let generator = Arc::new(build_generator(&config, fonts)?);
    let app_state = Arc::new(AppState { generator });

    // --- 3. Create the Web Router ---
    let app = router(app_state);

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    info!("Generated images are written to {}", config.output_dir.display());
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
