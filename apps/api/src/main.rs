mod candidate;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod outreach;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::outreach::writer::{EmailWriter, LlmEmailWriter, TemplateEmailWriter};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internal mobility API v{}", env!("CARGO_PKG_VERSION"));

    // Email writer: LLM-backed when a key is configured, templates otherwise
    let email_writer: Arc<dyn EmailWriter> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM email writer enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmEmailWriter(llm))
        }
        None => {
            info!("OPENAI_API_KEY not set, using template email writer");
            Arc::new(TemplateEmailWriter)
        }
    };

    let state = AppState::in_memory(config.clone(), email_writer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
