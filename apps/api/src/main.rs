mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod tweets;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tweets::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TweetCraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let llm = LlmClient::from_config(&config)?;
    match config.gemini_timeout_secs {
        Some(secs) => info!("LLM client initialized (model: {}, timeout: {secs}s)", llm.model()),
        None => info!("LLM client initialized (model: {}, no timeout)", llm.model()),
    }

    // Build app state
    let state = AppState {
        generator: Arc::new(llm),
        sessions: SessionStore::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
