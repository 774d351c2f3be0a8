//! Sahayak Server
//!
//! Serves the seven teaching-assistant functions under `/functions/v1/*`:
//! content generation, games, quick explanations, lesson plans, worksheet
//! differentiation, visual aids and reading assessment.
//!
//! Access via: http://localhost:8045

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use validator::Validate;

mod api;
mod cli;
mod cors;
mod router;
mod server_utils;
mod state;
#[cfg(test)]
mod test_helpers;

use sahayak_core::{HttpInvoker, Orchestrator};
use sahayak_types::ProviderKind;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.into_config();
    config.validate().map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    for kind in [ProviderKind::Gateway, ProviderKind::Gemini] {
        let settings = config.providers.settings(kind);
        if settings.credential().is_none() {
            warn!("{} is not set: {} requests will fail until it is configured", kind.credential_var(), kind);
        } else {
            info!("{} provider at {}", kind, settings.base_url);
        }
    }

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("sahayak-server/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let invoker = Arc::new(HttpInvoker::new(http_client, config.providers.clone()));
    let state = AppState::new(Orchestrator::new(invoker, config.models.clone()));

    let app = router::build_router(state, config.server.body_limit);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Functions available at http://{}/functions/v1/", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
