mod advice;
mod config;
mod errors;
mod format;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::orchestrator::Orchestrator;
use crate::advice::provider::{AdviceProvider, HttpAdviceProvider, LlmAdviceProvider};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails if no advice backend is configured)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional)
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.advice_timeout)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => None,
    };

    // Pick the advice provider: a hosted agent wins over the in-process one
    let provider: Arc<dyn AdviceProvider> = match (&config.advice_endpoint_url, &llm) {
        (Some(url), _) => Arc::new(HttpAdviceProvider::new(url.clone(), config.advice_timeout)?),
        (None, Some(llm)) => Arc::new(LlmAdviceProvider::new(llm.clone())),
        (None, None) => anyhow::bail!("No advice provider configured"),
    };
    info!(
        "Advice provider: {} (timeout {}s)",
        provider.backend(),
        config.advice_timeout.as_secs()
    );

    // Build app state
    let state = AppState {
        orchestrator: Orchestrator::new(provider),
        llm,
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
