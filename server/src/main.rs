mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, ".env not loaded");
    }

    let config = config::ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid server configuration");
    })?;
    let app = routes::app().inspect_err(|e| {
        tracing::error!(error = %e, "leptos app setup failed");
    })?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "shortener ui listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
