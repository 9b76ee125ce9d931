//! Nako Language Server - Main entry point
//!
//! Provides LSP support for Nadesiko sources with:
//! - Semantic token highlighting
//! - Particle-aware document highlights
//! - Token hover information

use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nako_lsp::config::log_filter;
use nako_lsp::NakoLanguageServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging to stderr (LSP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(log_filter())?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    tracing::info!("Starting Nako Language Server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(NakoLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
