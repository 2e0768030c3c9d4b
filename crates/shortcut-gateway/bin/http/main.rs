mod cli;

use crate::cli::CLI;
use clap::Parser;
use shortcut_gateway::app::App;
use shortcut_gateway::state::AppState;
use shortcut_generator::HashGenerator;
use shortcut_service::ShortenerService;
use shortcut_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        code_length = config.code_length,
        "starting gateway HTTP server"
    );

    let repository = InMemoryRepository::new();
    let generator = HashGenerator::builder().length(config.code_length).build();
    let service = ShortenerService::new(repository, generator);

    let state = AppState::new(Arc::new(service), config.public_base_url);
    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening for HTTP connections");
    axum::serve(listener, app).await?;

    Ok(())
}
