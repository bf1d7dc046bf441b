use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

mod analysis;
mod catalog;
mod config;
mod error;
mod llm;
mod routes;
mod utils;

use config::CONFIG;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _guards = init_logging();

    info!("Starting StyleMe analysis server");
    if CONFIG.gemini_api_key.trim().is_empty() {
        info!("GEMINI_API_KEY is not set; analysis endpoints will serve demo results only");
    }

    let addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
