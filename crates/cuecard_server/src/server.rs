//! Server startup.

use crate::api::{AppState, SharedDriver, create_router};
use crate::config::CuecardConfig;
use cuecard_error::{CuecardResult, ServerError, ServerErrorKind};
use cuecard_generation::FlashcardGenerator;
use cuecard_models::GeminiClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Build router state backed by the Gemini client described in `config`.
///
/// # Errors
///
/// Returns an error if the client cannot be created (for example, no API
/// key) or the generation settings are invalid.
pub fn gemini_state(config: &CuecardConfig) -> CuecardResult<AppState> {
    let client = GeminiClient::from_config(config.gemini())?;
    let driver: SharedDriver = Arc::new(client);
    state_for(driver, config)
}

/// Build router state around any driver.
///
/// # Errors
///
/// Returns an error if the generation settings are invalid.
pub fn state_for(driver: SharedDriver, config: &CuecardConfig) -> CuecardResult<AppState> {
    let generator = FlashcardGenerator::new(driver, config.generation().clone())?;
    Ok(AppState::new(generator).with_request_timeout(config.server().request_timeout()))
}

/// Run the HTTP server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the state cannot be built, the address cannot be
/// bound, or the server loop fails.
#[instrument(skip_all, fields(host = %config.server().host(), port = config.server().port()))]
pub async fn serve(config: CuecardConfig) -> CuecardResult<()> {
    let state = gemini_state(&config)?;
    let router = create_router(state);

    let addr = format!("{}:{}", config.server().host(), config.server().port());
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })
    })?;

    info!(
        addr = %addr,
        model = %config.gemini().model(),
        max_attempts = config.generation().max_attempts(),
        "Cuecard backend running at http://localhost:{}",
        config.server().port()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
