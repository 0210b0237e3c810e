use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentiment_analyzer::server::{create_router, AppState};
use sentiment_analyzer::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().context("failed to load settings")?;
    init_tracing(&settings);

    info!(
        "Starting {} v{} ({})",
        settings.app_name, settings.app_version, settings.environment
    );
    info!(
        "Negation window: {}, max text length: {}",
        settings.negation_window, settings.max_text_length
    );

    let addr = settings.bind_address();
    let app = create_router(AppState::from_settings(settings)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to this crate and tower-http.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sentiment_analyzer={level},tower_http={level}",
            level = settings.log_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
