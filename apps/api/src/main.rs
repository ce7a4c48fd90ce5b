mod config;
mod credits;
mod errors;
mod llm_client;
mod models;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credits::CreditClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: a missing API key stops the process here.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting audit API v{}", env!("CARGO_PKG_VERSION"));

    let credits = CreditClient::new(&config.credit_service_url, config.credit_timeout)?;
    info!("Credit client initialized ({})", config.credit_service_url);

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.completion_timeout,
    )?
    .with_backoff(config.completion_backoff);
    info!(
        "LLM client initialized (model: {}, max retries: {})",
        llm_client::MODEL,
        llm_client::MAX_RETRIES
    );

    if !config.report_formatting {
        info!("Report formatting pass disabled");
    }

    let state = AppState {
        credits,
        llm: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
