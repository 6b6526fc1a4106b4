use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, ServerConfig};
use crate::router::create_router;

pub async fn serve(config: ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("VerseVibe backend starting up");
    debug!("Bind address: {}", config.bind_address);

    let state = match initialize_app_state(&config).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    debug!("Request timeout: {:?}", config.request_timeout());
    let app = create_router(state, config.request_timeout());

    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("VerseVibe API server running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
