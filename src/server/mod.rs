//! HTTP server for the profile page

pub mod handlers;
pub mod router;
pub mod state;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::render::TemplateRenderer;
use crate::utils::error::{AppError, AppResult};

pub use router::create_router;
pub use state::AppState;

/// Bind the configured address and serve until Ctrl+C.
pub async fn run(config: &Config) -> AppResult<()> {
    let template_path = TemplateRenderer::from_config(config).home_template_path();
    if !template_path.exists() {
        warn!(
            path = %template_path.display(),
            "home template not found, requests will fail until it exists"
        );
    }

    let app = create_router(AppState::from_config(config));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;

    info!("Listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
