//! Word submission service entry point

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use webserver::{AppState, RealWordStore, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Longest-unique-word submission service")]
struct Args {
    /// Port for the HTTP API
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Journal file for durable storage (omit for an in-memory store)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    shared::logging::init_tracing("webserver", Some(&args.log_level));

    let store = match &args.data_file {
        Some(path) => {
            info!(path = %path.display(), "Opening journaled word store");
            RealWordStore::open(path).await?
        }
        None => {
            info!("Using in-memory word store; submissions will not survive restarts");
            RealWordStore::in_memory()
        }
    };

    let state = Arc::new(AppState::new(Arc::new(store)));
    let router = webserver::web::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| WebServerError::ServerStartupFailed { port: args.port })?;

    info!(%addr, "Word submission service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
