mod classifier;
mod config;
mod demo;
mod error;
mod normalize;
mod prompt;
mod research;
mod server;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use research_common::anthropic::AnthropicClient;

use config::Config;
use research::Researcher;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting item-research server");

    let config = Config::from_env()?;

    let researcher = match config.anthropic.clone() {
        Some(anthropic) => {
            info!(
                base_url = %anthropic.base_url,
                model = %anthropic.model,
                max_tokens = anthropic.max_tokens,
                timeout_secs = anthropic.timeout.map(|t| t.as_secs()),
                "anthropic client configured"
            );
            let model = anthropic.model.clone();
            let max_tokens = anthropic.max_tokens;
            let client = Arc::new(AnthropicClient::new(anthropic)?);
            Researcher::live(client, model, max_tokens)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set, serving demo data");
            Researcher::demo()
        }
    };

    let app = server::router(AppState::new(researcher));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        demo = config.demo_mode(),
        "HTTP server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
        })?;

    info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
