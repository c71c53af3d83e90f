//! concept-draw server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use concept_draw::api;
use concept_draw::app_state::AppState;
use concept_draw::config::DrawConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = DrawConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let table = config.load_category_table()?;
    tracing::info!(
        addr = %config.listen_addr,
        categories = table.definitions().len(),
        concepts = table.total_concepts(),
        rehearsal = config.rehearsal_enabled,
        "starting concept-draw"
    );

    // Build service layer and router
    let app = api::build_app(AppState::new(table, &config));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");
    tracing::info!("monitor feed available at ws://{}/ws", config.listen_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
